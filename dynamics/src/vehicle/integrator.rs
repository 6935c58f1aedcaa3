use std::sync::atomic::{AtomicBool, Ordering};

use bevy_math::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::frame::wrap_heading;
use super::model::DynamicsModel;
use super::trajectory::Trajectory;
use super::types::{InitialPose, ThrusterArray, VehicleGeometry, VehicleState};
use crate::check::{ensure_non_negative, ensure_positive};
use crate::SimError;

/// Hard ceiling on samples per run.
///
/// The trajectory is preallocated at about 80 bytes per sample, so a run at
/// the ceiling reserves roughly 800 MB before the first step.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Cooperative stop request, polled once per integration step.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// A [`Cancellation`] that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Everything one run needs. Read-only for the duration of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub thrusters: ThrusterArray,
    pub geometry: VehicleGeometry,
    /// Integration step (s).
    pub time_step: f64,
    /// End of the half-open sampling interval [0, time_final) (s).
    pub time_final: f64,
    #[serde(default)]
    pub initial: InitialPose,
}

/// Number of sample times `i * time_step` strictly below `time_final`.
pub fn sample_count(time_step: f64, time_final: f64) -> Result<usize, SimError> {
    let dt = ensure_positive("time_step", time_step)?;
    let tf = ensure_non_negative("time_final", time_final)?;

    let ratio = (tf / dt).ceil();
    if !ratio.is_finite() || ratio > MAX_SAMPLES as f64 {
        return Err(SimError::Domain {
            name: "time_final",
            requirement: "at most 10 million time steps long",
            value: tf,
        });
    }

    // The division can round across an integer; settle on the exact boundary.
    let mut n = ratio as usize;
    while n > 0 && (n - 1) as f64 * dt >= tf {
        n -= 1;
    }
    while (n as f64) * dt < tf {
        n += 1;
    }
    Ok(n)
}

/// Rejects runs whose state could overflow before the last sample.
///
/// At any heading each world-frame force component is at most
/// `|Fx| + |Fy|` of the body-frame force, so speed stays below `a * t` and
/// displacement below `a * t^2` over a horizon `t`.
fn ensure_bounded(
    params: &SimulationParams,
    model: &DynamicsModel,
    alpha: f64,
    samples: usize,
) -> Result<(), SimError> {
    let horizon = samples as f64 * params.time_step;
    let sweep = |accel: f64| {
        if accel == 0.0 {
            0.0
        } else {
            accel * horizon * horizon
        }
    };

    let force = model.layout().body_force(&params.thrusters);
    let accel = (force.x.abs() + force.y.abs()) / params.geometry.mass;
    let reach = params.initial.x.abs() + params.initial.y.abs() + sweep(accel);
    if !reach.is_finite() {
        return Err(SimError::Domain {
            name: "thrusters",
            requirement: "small enough to keep the position finite over the run",
            value: accel,
        });
    }
    if !sweep(alpha.abs()).is_finite() {
        return Err(SimError::Domain {
            name: "thrusters",
            requirement: "small enough to keep the turn rate finite over the run",
            value: alpha,
        });
    }
    Ok(())
}

/// A validated run, ready to integrate.
///
/// Construction performs every precondition check, including a bound on how
/// far the state can grow, so a `Simulation` that exists can only fail at run
/// time through cancellation.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: SimulationParams,
    model: DynamicsModel,
    samples: usize,
    alpha: f64,
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Result<Self, SimError> {
        params.thrusters.validate()?;
        params.initial.validate()?;
        let model = DynamicsModel::new(&params.geometry)?;
        let samples = sample_count(params.time_step, params.time_final)?;
        // Torque does not depend on heading, so alpha is fixed for the run.
        let alpha = model.angular(&params.thrusters)?;
        ensure_bounded(&params, &model, alpha, samples)?;
        Ok(Self {
            params,
            model,
            samples,
            alpha,
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn model(&self) -> &DynamicsModel {
        &self.model
    }

    /// Length of the trajectory this run will produce.
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn initial_state(&self) -> VehicleState {
        let pose = self.params.initial;
        VehicleState {
            position: DVec2::new(pose.x, pose.y),
            theta: wrap_heading(pose.theta),
            velocity: DVec2::ZERO,
            omega: 0.0,
        }
    }

    pub fn run(&self) -> Result<Trajectory, SimError> {
        self.run_with_cancel(&NeverCancel)
    }

    /// Explicit Euler integration over the whole run.
    ///
    /// The linear force law for step `i` is evaluated at the heading of step
    /// `i - 1`, so orientation lags translation by one step. Trajectories are
    /// defined with that lag; do not "fix" it here.
    pub fn run_with_cancel<C: Cancellation + ?Sized>(
        &self,
        cancel: &C,
    ) -> Result<Trajectory, SimError> {
        let n = self.samples;
        let dt = self.params.time_step;
        let thrusters = &self.params.thrusters;

        let mut time = vec![0.0; n];
        let mut states = vec![VehicleState::default(); n];
        let mut linear = vec![DVec2::ZERO; n];
        let mut angular = vec![0.0; n];

        if n == 0 {
            return Ok(Trajectory::from_parts(time, states, linear, angular));
        }
        debug!(samples = n, time_step = dt, "integrating trajectory");

        states[0] = self.initial_state();
        let alpha = self.alpha;

        for i in 1..n {
            if cancel.is_cancelled() {
                warn!(completed = i, total = n, "simulation cancelled");
                return Err(SimError::Cancelled {
                    completed: i,
                    total: n,
                });
            }

            let prev = states[i - 1];
            let a = self.model.linear(thrusters, prev.theta)?;
            let velocity = prev.velocity + a * dt;
            let position = prev.position + velocity * dt;
            let omega = prev.omega + alpha * dt;
            let theta = wrap_heading(prev.theta + omega * dt);

            time[i] = i as f64 * dt;
            states[i] = VehicleState {
                position,
                theta,
                velocity,
                omega,
            };
            linear[i] = a;
            angular[i] = alpha;
        }

        let last = states[n - 1];
        debug!(
            x = last.position.x,
            y = last.position.y,
            theta = last.theta,
            "trajectory complete"
        );
        Ok(Trajectory::from_parts(time, states, linear, angular))
    }
}

/// One-call entry point for untyped callers.
///
/// Every argument is validated before the first step; on error no trajectory
/// is produced at all.
#[allow(clippy::too_many_arguments)]
pub fn run_simulation(
    thrusters: &[f64],
    alpha: f64,
    horizontal_distance: f64,
    vertical_distance: f64,
    moment_of_inertia: f64,
    mass: f64,
    time_step: f64,
    time_final: f64,
    initial_x: f64,
    initial_y: f64,
    initial_theta: f64,
) -> Result<Trajectory, SimError> {
    let params = SimulationParams {
        thrusters: ThrusterArray::try_from(thrusters)?,
        geometry: VehicleGeometry {
            alpha,
            horizontal_distance,
            vertical_distance,
            mass,
            moment_of_inertia,
        },
        time_step,
        time_final,
        initial: InitialPose {
            x: initial_x,
            y: initial_y,
            theta: initial_theta,
        },
    };
    Simulation::new(params)?.run()
}
