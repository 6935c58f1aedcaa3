use serde::{Deserialize, Serialize};

use crate::check::{ensure_non_negative, ensure_positive};
use crate::SimError;

/// Fluid the vehicle sits in. Passed explicitly to every hydrostatic formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidEnvironment {
    /// kg/m^3
    pub density: f64,
    /// m/s^2
    pub gravity: f64,
}

impl FluidEnvironment {
    pub const FRESH_WATER: Self = Self { density: 1000.0, gravity: 9.81 };
    pub const SEA_WATER: Self = Self { density: 1025.0, gravity: 9.81 };

    pub fn validate(&self) -> Result<(), SimError> {
        ensure_positive("density", self.density)?;
        ensure_positive("gravity", self.gravity)?;
        Ok(())
    }
}

impl Default for FluidEnvironment {
    fn default() -> Self {
        Self::FRESH_WATER
    }
}

/// Outcome of comparing buoyancy with weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Floatation {
    Floats,
    Sinks,
    /// Buoyancy exactly balances weight.
    Neutral,
}

/// Upward force (N) on a fully submerged body of `volume` m^3.
pub fn buoyancy(volume: f64, env: &FluidEnvironment) -> Result<f64, SimError> {
    let volume = ensure_positive("volume", volume)?;
    env.validate()?;
    Ok(env.density * volume * env.gravity)
}

/// Whether a body of the given volume and mass floats in `env`.
pub fn floatation(volume: f64, mass: f64, env: &FluidEnvironment) -> Result<Floatation, SimError> {
    let lift = buoyancy(volume, env)?;
    let weight = ensure_positive("mass", mass)? * env.gravity;
    Ok(if lift > weight {
        Floatation::Floats
    } else if lift < weight {
        Floatation::Sinks
    } else {
        Floatation::Neutral
    })
}

/// Gauge pressure (Pa) at `depth` meters, positive downward from the surface.
pub fn pressure(depth: f64, env: &FluidEnvironment) -> Result<f64, SimError> {
    let depth = ensure_non_negative("depth", depth)?;
    env.validate()?;
    Ok(env.density * env.gravity * depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: FluidEnvironment = FluidEnvironment::FRESH_WATER;

    #[test]
    fn tenth_of_a_cubic_meter_lifts_981_newtons() {
        let b = buoyancy(0.1, &WATER).unwrap();
        assert!((b - 981.0).abs() < 1e-9, "buoyancy={b}");
        assert!(buoyancy(1.0, &WATER).unwrap() > 0.0);
    }

    #[test]
    fn negative_volume_is_a_domain_error() {
        assert!(matches!(
            buoyancy(-100.0, &WATER),
            Err(SimError::Domain { name: "volume", .. })
        ));
    }

    #[test]
    fn floatation_compares_lift_with_weight() {
        assert_eq!(floatation(0.1, 50.0, &WATER), Ok(Floatation::Floats));
        assert_eq!(floatation(0.1, 100.0, &WATER), Ok(Floatation::Neutral));
        assert_eq!(floatation(0.1, 1000.0, &WATER), Ok(Floatation::Sinks));
        assert!(floatation(-0.1, 100.0, &WATER).is_err());
    }

    #[test]
    fn pressure_grows_linearly_with_depth() {
        let p = pressure(10.0, &WATER).unwrap();
        assert!((p - 98_100.0).abs() < 1e-6, "pressure={p}");
        assert_eq!(pressure(0.0, &WATER), Ok(0.0));
        assert!(pressure(-100.0, &WATER).is_err());
    }

    #[test]
    fn custom_fluid_is_honored() {
        let env = FluidEnvironment { density: 1025.0, gravity: 1.62 };
        let b = buoyancy(2.0, &env).unwrap();
        assert!((b - 1025.0 * 2.0 * 1.62).abs() < 1e-9);

        let bad = FluidEnvironment { density: 0.0, ..WATER };
        assert!(matches!(pressure(1.0, &bad), Err(SimError::Domain { name: "density", .. })));
    }
}
