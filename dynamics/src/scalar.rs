//! Single-axis formulas.
//!
//! The dynamics model only calls [`linear_acceleration`] and
//! [`angular_acceleration`]; the rest are here for callers sizing a vehicle
//! or checking a single thruster by hand.

use bevy_math::DVec2;

use crate::check::{ensure_finite, ensure_non_negative, ensure_positive};
use crate::SimError;

/// Newton's second law along one axis: `a = F / m`.
pub fn linear_acceleration(force: f64, mass: f64) -> Result<f64, SimError> {
    let force = ensure_finite("force", force)?;
    let mass = ensure_positive("mass", mass)?;
    Ok(force / mass)
}

/// Rotational analogue of [`linear_acceleration`]: `alpha = tau / I`.
pub fn angular_acceleration(torque: f64, moment_of_inertia: f64) -> Result<f64, SimError> {
    let torque = ensure_finite("torque", torque)?;
    let inertia = ensure_positive("moment_of_inertia", moment_of_inertia)?;
    Ok(torque / inertia)
}

/// Point-mass moment of inertia `m * r^2`.
pub fn moment_of_inertia(mass: f64, radius: f64) -> Result<f64, SimError> {
    let mass = ensure_positive("mass", mass)?;
    let radius = ensure_non_negative("radius", radius)?;
    Ok(mass * radius * radius)
}

/// Torque of a force applied `distance` meters from the pivot, with the force
/// direction given in degrees relative to the lever arm.
pub fn torque(force: f64, angle_deg: f64, distance: f64) -> Result<f64, SimError> {
    let force = ensure_finite("force", force)?;
    let angle = ensure_finite("angle", angle_deg)?.to_radians();
    let distance = ensure_non_negative("distance", distance)?;
    Ok(distance * force * angle.sin())
}

/// Planar acceleration from a single thruster pushing at `angle` radians off the body X axis.
pub fn thruster_acceleration(force: f64, angle: f64, mass: f64) -> Result<DVec2, SimError> {
    let angle = ensure_finite("angle", angle)?;
    let (s, c) = angle.sin_cos();
    Ok(DVec2::new(
        linear_acceleration(force * c, mass)?,
        linear_acceleration(force * s, mass)?,
    ))
}

/// Angular acceleration from a single thruster mounted `distance` meters from the center of mass.
pub fn thruster_angular_acceleration(
    force: f64,
    angle: f64,
    moment_of_inertia: f64,
    distance: f64,
) -> Result<f64, SimError> {
    let angle = ensure_finite("angle", angle)?;
    let distance = ensure_non_negative("distance", distance)?;
    angular_acceleration(distance * force * angle.sin(), moment_of_inertia)
}
