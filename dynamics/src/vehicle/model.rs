use bevy_math::DVec2;

use super::frame::body_to_world;
use super::thrusters::ThrusterLayout;
use super::types::{ThrusterArray, VehicleGeometry};
use crate::scalar::{angular_acceleration, linear_acceleration};
use crate::SimError;

/// Force law for one hull: thruster commands and heading in, accelerations out.
///
/// Holds no state between calls; identical inputs always give identical outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsModel {
    layout: ThrusterLayout,
    mass: f64,
    moment_of_inertia: f64,
}

impl DynamicsModel {
    pub fn new(geometry: &VehicleGeometry) -> Result<Self, SimError> {
        geometry.validate()?;
        Ok(Self {
            layout: ThrusterLayout::from_geometry(geometry)?,
            mass: geometry.mass,
            moment_of_inertia: geometry.moment_of_inertia,
        })
    }

    pub fn layout(&self) -> &ThrusterLayout {
        &self.layout
    }

    /// World-frame linear acceleration at heading `theta`.
    pub fn linear(&self, thrusters: &ThrusterArray, theta: f64) -> Result<DVec2, SimError> {
        let world = body_to_world(self.layout.body_force(thrusters), theta);
        Ok(DVec2::new(
            linear_acceleration(world.x, self.mass)?,
            linear_acceleration(world.y, self.mass)?,
        ))
    }

    /// Angular acceleration; independent of heading.
    pub fn angular(&self, thrusters: &ThrusterArray) -> Result<f64, SimError> {
        angular_acceleration(self.layout.torque(thrusters), self.moment_of_inertia)
    }

    /// Both accelerations for a single evaluation, validating every input.
    pub fn evaluate(
        thrusters: &ThrusterArray,
        geometry: &VehicleGeometry,
        theta: f64,
    ) -> Result<(DVec2, f64), SimError> {
        thrusters.validate()?;
        let model = Self::new(geometry)?;
        Ok((model.linear(thrusters, theta)?, model.angular(thrusters)?))
    }
}
