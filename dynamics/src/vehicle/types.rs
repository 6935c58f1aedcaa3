use bevy_math::DVec2;
use serde::{Deserialize, Serialize};

use crate::check::{ensure_finite, ensure_positive};
use crate::SimError;

/// Commanded force of each of the four thrusters, in Newtons.
///
/// Positive thrust pushes thruster 1 forward-left, 2 forward-right, 3 aft-right
/// and 4 aft-left; negative values are reverse thrust. Deserializes from a
/// plain list and rejects any length other than four.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 4]")]
pub struct ThrusterArray(pub [f64; 4]);

impl ThrusterArray {
    pub const IDLE: Self = Self([0.0; 4]);

    pub const fn new(forces: [f64; 4]) -> Self {
        Self(forces)
    }

    pub fn forces(&self) -> &[f64; 4] {
        &self.0
    }

    pub fn validate(&self) -> Result<(), SimError> {
        for &f in &self.0 {
            ensure_finite("thrusters", f)?;
        }
        Ok(())
    }
}

impl TryFrom<&[f64]> for ThrusterArray {
    type Error = SimError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let forces: [f64; 4] = values
            .try_into()
            .map_err(|_| SimError::Shape(values.len()))?;
        let thrusters = Self(forces);
        thrusters.validate()?;
        Ok(thrusters)
    }
}

impl TryFrom<Vec<f64>> for ThrusterArray {
    type Error = SimError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<[f64; 4]> for ThrusterArray {
    fn from(forces: [f64; 4]) -> Self {
        Self(forces)
    }
}

impl From<ThrusterArray> for [f64; 4] {
    fn from(thrusters: ThrusterArray) -> Self {
        thrusters.0
    }
}

/// Mounting and inertial parameters of the hull. Fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleGeometry {
    /// Thruster mounting angle off the body X axis (radians).
    pub alpha: f64,
    /// Longitudinal distance from the center of mass to each thruster (m).
    pub horizontal_distance: f64,
    /// Lateral distance from the center of mass to each thruster (m).
    pub vertical_distance: f64,
    /// kg
    pub mass: f64,
    /// kg·m^2
    pub moment_of_inertia: f64,
}

impl VehicleGeometry {
    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("alpha", self.alpha)?;
        ensure_positive("horizontal_distance", self.horizontal_distance)?;
        ensure_positive("vertical_distance", self.vertical_distance)?;
        ensure_positive("mass", self.mass)?;
        ensure_positive("moment_of_inertia", self.moment_of_inertia)?;
        Ok(())
    }
}

/// Where the vehicle starts. Velocity and angular velocity always start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialPose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl InitialPose {
    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("initial_x", self.x)?;
        ensure_finite("initial_y", self.y)?;
        ensure_finite("initial_theta", self.theta)?;
        Ok(())
    }
}

/// Kinematic state in the world frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: DVec2,
    /// Heading in [0, 2π).
    pub theta: f64,
    pub velocity: DVec2,
    /// Angular velocity (rad/s), positive counter-clockwise.
    pub omega: f64,
}

impl VehicleState {
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> VehicleGeometry {
        VehicleGeometry {
            alpha: 0.5,
            horizontal_distance: 1.0,
            vertical_distance: 1.0,
            mass: 100.0,
            moment_of_inertia: 100.0,
        }
    }

    #[test]
    fn slice_of_four_is_accepted() {
        let t = ThrusterArray::try_from(&[1.0, -2.0, 3.0, 0.0][..]).unwrap();
        assert_eq!(t.forces(), &[1.0, -2.0, 3.0, 0.0]);
    }

    #[test]
    fn wrong_length_is_a_shape_error() {
        assert_eq!(ThrusterArray::try_from(&[1.0, 2.0, 3.0][..]), Err(SimError::Shape(3)));
        assert_eq!(ThrusterArray::try_from(vec![0.0; 5]), Err(SimError::Shape(5)));
        assert_eq!(ThrusterArray::try_from(Vec::new()), Err(SimError::Shape(0)));
    }

    #[test]
    fn nan_thrust_is_rejected_at_the_boundary() {
        let err = ThrusterArray::try_from(&[0.0, f64::NAN, 0.0, 0.0][..]).unwrap_err();
        assert!(matches!(err, SimError::InputKind { name: "thrusters", .. }));
    }

    #[test]
    fn each_geometry_field_is_checked() {
        assert!(geometry().validate().is_ok());

        let cases: [(&str, fn(&mut VehicleGeometry)); 4] = [
            ("horizontal_distance", |g| g.horizontal_distance = -10.0),
            ("vertical_distance", |g| g.vertical_distance = 0.0),
            ("mass", |g| g.mass = 0.0),
            ("moment_of_inertia", |g| g.moment_of_inertia = -1.0),
        ];
        for (field, corrupt) in cases {
            let mut g = geometry();
            corrupt(&mut g);
            let err = g.validate().unwrap_err();
            assert_eq!(err.field(), Some(field), "{err}");
        }
    }
}
