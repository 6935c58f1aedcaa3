use std::f64::consts::FRAC_PI_4;

use crate::{InitialPose, SimulationParams, ThrusterArray, VehicleGeometry};

/// Hull used throughout the course material: thrusters at 45°, one meter out
/// on both axes, 100 kg and 100 kg·m².
pub fn training_hull() -> VehicleGeometry {
    VehicleGeometry {
        alpha: FRAC_PI_4,
        horizontal_distance: 1.0,
        vertical_distance: 1.0,
        mass: 100.0,
        moment_of_inertia: 100.0,
    }
}

/// A longer, narrower hull with shallower thruster mounts.
pub fn survey_hull() -> VehicleGeometry {
    VehicleGeometry {
        alpha: 0.35,
        horizontal_distance: 0.8,
        vertical_distance: 0.25,
        mass: 60.0,
        moment_of_inertia: 14.0,
    }
}

/// Ten seconds at 10 Hz from the origin with the given thrust.
pub fn ten_second_run(thrusters: [f64; 4]) -> SimulationParams {
    SimulationParams {
        thrusters: ThrusterArray::new(thrusters),
        geometry: training_hull(),
        time_step: 0.1,
        time_final: 10.0,
        initial: InitialPose::default(),
    }
}
