use bevy_math::DVec2;
use serde::Serialize;

use super::types::VehicleState;

/// Result of one simulation run: one entry per sample time, in order.
///
/// All four series always have the same length. The value is read-only once
/// the integrator hands it back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Trajectory {
    time: Vec<f64>,
    states: Vec<VehicleState>,
    linear_acceleration: Vec<DVec2>,
    angular_acceleration: Vec<f64>,
}

/// A single row of a [`Trajectory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64,
    pub state: VehicleState,
    pub linear_acceleration: DVec2,
    pub angular_acceleration: f64,
}

impl Trajectory {
    pub(super) fn from_parts(
        time: Vec<f64>,
        states: Vec<VehicleState>,
        linear_acceleration: Vec<DVec2>,
        angular_acceleration: Vec<f64>,
    ) -> Self {
        debug_assert!(
            time.len() == states.len()
                && time.len() == linear_acceleration.len()
                && time.len() == angular_acceleration.len(),
            "trajectory series must have equal length"
        );
        Self {
            time,
            states,
            linear_acceleration,
            angular_acceleration,
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn states(&self) -> &[VehicleState] {
        &self.states
    }

    pub fn linear_acceleration(&self) -> &[DVec2] {
        &self.linear_acceleration
    }

    pub fn angular_acceleration(&self) -> &[f64] {
        &self.angular_acceleration
    }

    pub fn get(&self, index: usize) -> Option<TrajectorySample> {
        (index < self.len()).then(|| self.row(index))
    }

    pub fn last(&self) -> Option<TrajectorySample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn samples(&self) -> impl ExactSizeIterator<Item = TrajectorySample> + '_ {
        (0..self.len()).map(move |i| self.row(i))
    }

    /// Latest sample at or before `t`, clamped to the ends of the run.
    pub fn sample_at(&self, t: f64) -> Option<TrajectorySample> {
        if self.is_empty() {
            return None;
        }
        let idx = self.time.partition_point(|&ti| ti <= t);
        self.get(idx.saturating_sub(1))
    }

    fn row(&self, index: usize) -> TrajectorySample {
        TrajectorySample {
            time: self.time[index],
            state: self.states[index],
            linear_acceleration: self.linear_acceleration[index],
            angular_acceleration: self.angular_acceleration[index],
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.states.iter().map(|s| s.position)
    }

    pub fn peak_speed(&self) -> f64 {
        self.states.iter().map(VehicleState::speed).fold(0.0, f64::max)
    }

    pub fn peak_angular_velocity(&self) -> f64 {
        self.states.iter().map(|s| s.omega.abs()).fold(0.0, f64::max)
    }

    /// Total distance covered along the sampled path.
    pub fn path_length(&self) -> f64 {
        self.states
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position))
            .sum()
    }
}
