//! Planar rigid-body dynamics for a four-thruster underwater vehicle.
//!
//! No engine or I/O types live here. Callers hand in
//! thruster commands and vehicle geometry and get back an immutable
//! [`Trajectory`] the runner can summarize and the viewer can animate.

mod check;
mod error;
pub use error::SimError;

pub mod scalar;
pub use scalar::{angular_acceleration, linear_acceleration};

pub mod hydrostatics;
pub use hydrostatics::{FluidEnvironment, Floatation};

pub mod vehicle;
pub use vehicle::{
    body_force, body_to_world, net_torque, run_simulation, sample_count, wrap_heading,
    Cancellation, DynamicsModel, InitialPose, NeverCancel, Simulation, SimulationParams,
    ThrusterArray, ThrusterLayout, Trajectory, TrajectorySample, VehicleGeometry, VehicleState, MAX_SAMPLES,
};

pub mod presets;
