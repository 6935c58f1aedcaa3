use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dynamics::{presets, FluidEnvironment, InitialPose, SimulationParams, ThrusterArray, VehicleGeometry};
use serde::{Deserialize, Serialize};

/// Top-level scenario file.
///
/// A file must list its own scenarios; the built-in one from [`Config::default`]
/// is only used when no file is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Constants for the hydrostatic checks; never read by the dynamics core.
    #[serde(default)]
    pub fluid: FluidEnvironment,
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<ScenarioConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fluid: FluidEnvironment::default(),
            scenarios: vec![ScenarioConfig::default()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub thrusters: ThrusterArray,
    pub time_step: f64,
    pub time_final: f64,
    /// Displaced hull volume (m^3); enables the floatation check.
    #[serde(default)]
    pub hull_volume: Option<f64>,
    /// Depth of the horizontal plane the run happens in (m); enables the pressure check.
    #[serde(default)]
    pub operating_depth: Option<f64>,
    pub geometry: VehicleGeometry,
    #[serde(default)]
    pub initial: InitialPose,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let params = presets::ten_second_run([10.0, 0.0, 0.0, 0.0]);
        Self {
            name: "single-thruster".to_string(),
            thrusters: params.thrusters,
            geometry: params.geometry,
            time_step: params.time_step,
            time_final: params.time_final,
            initial: params.initial,
            hull_volume: None,
            operating_depth: None,
        }
    }
}

impl ScenarioConfig {
    pub fn params(&self) -> SimulationParams {
        SimulationParams {
            thrusters: self.thrusters,
            geometry: self.geometry,
            time_step: self.time_step,
            time_final: self.time_final,
            initial: self.initial,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading scenario file {}", path.display()))
}

/// Parse and sanity-check a scenario file. Physical preconditions are left to
/// the simulation itself so each scenario reports its own failure.
pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text)?;
    if cfg.scenarios.is_empty() {
        bail!("scenario file defines no [[scenario]] entries");
    }
    let mut seen = HashSet::new();
    for s in &cfg.scenarios {
        if !seen.insert(s.name.as_str()) {
            bail!("duplicate scenario name {:?}", s.name);
        }
    }
    cfg.fluid.validate().context("invalid [fluid] table")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"
        [[scenario]]
        name = "a"
        thrusters = [1.0, 2.0, 3.0, 4.0]
        time_step = 0.1
        time_final = 2

        [scenario.geometry]
        alpha = 0.5
        horizontal_distance = 1.0
        vertical_distance = 0.5
        mass = 10.0
        moment_of_inertia = 2.0
    "#;

    #[test]
    fn minimal_file_gets_defaults() {
        let cfg = parse_config(ONE).unwrap();
        assert_eq!(cfg.fluid, FluidEnvironment::FRESH_WATER);
        let s = &cfg.scenarios[0];
        assert_eq!(s.thrusters.forces(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.time_final, 2.0);
        assert_eq!(s.initial, InitialPose::default());
        assert!(s.hull_volume.is_none());
    }

    #[test]
    fn three_thrusters_is_a_shape_error() {
        let text = ONE.replace("[1.0, 2.0, 3.0, 4.0]", "[1.0, 2.0, 3.0]");
        let err = parse_config(&text).unwrap_err();
        assert!(
            format!("{err:#}").contains("expected exactly 4 thruster magnitudes, got 3"),
            "{err:#}"
        );
    }

    #[test]
    fn file_without_scenarios_is_rejected() {
        for text in ["", "[fluid]\ndensity = 1025.0\n"] {
            let err = parse_config(text).unwrap_err();
            assert!(err.to_string().contains("no [[scenario]] entries"), "{err}");
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let text = format!("{ONE}\n{ONE}");
        let err = parse_config(&text).unwrap_err();
        assert!(err.to_string().contains("duplicate scenario name"), "{err}");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string(&Config::default()).unwrap();
        let cfg = parse_config(&text).unwrap();
        assert_eq!(cfg.scenarios.len(), 1);
        assert_eq!(cfg.scenarios[0].params(), Config::default().scenarios[0].params());
    }
}
