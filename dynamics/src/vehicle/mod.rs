mod types;
mod thrusters;
mod frame;
mod model;
mod trajectory;
mod integrator;

pub use types::{InitialPose, ThrusterArray, VehicleGeometry, VehicleState};
pub use thrusters::{body_force, net_torque, ThrusterLayout};
pub use frame::{body_to_world, wrap_heading};
pub use model::DynamicsModel;
pub use trajectory::{Trajectory, TrajectorySample};
pub use integrator::{
    run_simulation, sample_count, Cancellation, NeverCancel, Simulation, SimulationParams,
    MAX_SAMPLES,
};
