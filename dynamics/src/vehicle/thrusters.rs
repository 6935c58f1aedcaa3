use bevy_math::DVec2;

use super::types::{ThrusterArray, VehicleGeometry};
use crate::check::{ensure_finite, ensure_positive};
use crate::SimError;

// Per-thruster signs of the body-frame contribution, scaled by cos(alpha),
// sin(alpha) and the torque lever respectively.
const SURGE_SIGNS: [f64; 4] = [1.0, 1.0, -1.0, -1.0];
const SWAY_SIGNS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];
const YAW_SIGNS: [f64; 4] = [1.0, -1.0, 1.0, -1.0];

/// Thruster-to-body coefficients for one hull, evaluated once per run.
///
/// `surge`/`sway` map thruster magnitudes to body X/Y force and `yaw` maps
/// them to torque about the center of mass. Only the heading rotation has to
/// be recomputed per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrusterLayout {
    surge: [f64; 4],
    sway: [f64; 4],
    yaw: [f64; 4],
    moment_arm: f64,
    beta: f64,
}

impl ThrusterLayout {
    pub fn new(alpha: f64, horizontal_distance: f64, vertical_distance: f64) -> Result<Self, SimError> {
        let alpha = ensure_finite("alpha", alpha)?;
        let h = ensure_positive("horizontal_distance", horizontal_distance)?;
        let v = ensure_positive("vertical_distance", vertical_distance)?;

        let (s, c) = alpha.sin_cos();
        let moment_arm = h.hypot(v);
        let beta = (v / h).atan();
        let lever = (alpha + beta).sin() * moment_arm;

        Ok(Self {
            surge: SURGE_SIGNS.map(|k| k * c),
            sway: SWAY_SIGNS.map(|k| k * s),
            yaw: YAW_SIGNS.map(|k| k * lever),
            moment_arm,
            beta,
        })
    }

    pub fn from_geometry(geometry: &VehicleGeometry) -> Result<Self, SimError> {
        Self::new(
            geometry.alpha,
            geometry.horizontal_distance,
            geometry.vertical_distance,
        )
    }

    /// Net thrust in the body frame (N).
    pub fn body_force(&self, thrusters: &ThrusterArray) -> DVec2 {
        DVec2::new(
            dot4(&self.surge, thrusters.forces()),
            dot4(&self.sway, thrusters.forces()),
        )
    }

    /// Net torque about the center of mass (N·m), positive counter-clockwise.
    pub fn torque(&self, thrusters: &ThrusterArray) -> f64 {
        dot4(&self.yaw, thrusters.forces())
    }

    /// Distance from the center of mass to each thruster.
    pub fn moment_arm(&self) -> f64 {
        self.moment_arm
    }

    /// Angle of the thruster position off the body X axis.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

/// Body-frame force of four thrusters mounted at `alpha`.
pub fn body_force(thrusters: &ThrusterArray, alpha: f64) -> Result<DVec2, SimError> {
    thrusters.validate()?;
    let (s, c) = ensure_finite("alpha", alpha)?.sin_cos();
    Ok(DVec2::new(
        dot4(&SURGE_SIGNS, thrusters.forces()) * c,
        dot4(&SWAY_SIGNS, thrusters.forces()) * s,
    ))
}

/// Net torque of four thrusters about the center of mass.
pub fn net_torque(
    thrusters: &ThrusterArray,
    alpha: f64,
    horizontal_distance: f64,
    vertical_distance: f64,
) -> Result<f64, SimError> {
    thrusters.validate()?;
    Ok(ThrusterLayout::new(alpha, horizontal_distance, vertical_distance)?.torque(thrusters))
}

#[inline]
fn dot4(coeffs: &[f64; 4], forces: &[f64; 4]) -> f64 {
    coeffs.iter().zip(forces).map(|(k, f)| k * f).sum()
}
