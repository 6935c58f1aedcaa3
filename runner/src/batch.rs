use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use dynamics::hydrostatics::{floatation, pressure};
use dynamics::{FluidEnvironment, Floatation, SimError, Simulation, Trajectory};
use rayon::prelude::*;
use tracing::{error, info, info_span};
use uuid::Uuid;

use crate::config::{Config, ScenarioConfig};

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Run only the scenario with this name.
    pub only: Option<String>,
    /// Raise the shared cancel flag on the first failure.
    pub fail_fast: bool,
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub trajectory: Trajectory,
    pub floatation: Option<Floatation>,
    /// Hydrostatic pressure at the operating depth (Pa).
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub run_id: Uuid,
    pub result: Result<ScenarioReport, SimError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Simulate the selected scenarios in parallel, one independent run each.
///
/// Outcomes come back in file order. A scenario with bad inputs fails on its
/// own; with `fail_fast` it also cancels whatever is still running.
pub fn run_batch(cfg: &Config, opts: &BatchOptions) -> Result<Vec<ScenarioOutcome>> {
    let selected: Vec<&ScenarioConfig> = match &opts.only {
        Some(name) => cfg.scenarios.iter().filter(|s| &s.name == name).collect(),
        None => cfg.scenarios.iter().collect(),
    };
    if selected.is_empty() {
        let known: Vec<&str> = cfg.scenarios.iter().map(|s| s.name.as_str()).collect();
        bail!(
            "no scenario named {:?} (known: {})",
            opts.only.as_deref().unwrap_or_default(),
            known.join(", ")
        );
    }

    let cancel = AtomicBool::new(false);
    let outcomes = selected
        .par_iter()
        .map(|scenario| {
            let run_id = Uuid::new_v4();
            let span = info_span!("scenario", name = %scenario.name, %run_id);
            let _enter = span.enter();

            let result = run_one(scenario, &cfg.fluid, &cancel);
            match &result {
                Ok(report) => info!(samples = report.trajectory.len(), "scenario finished"),
                Err(err) => {
                    error!(%err, "scenario failed");
                    if opts.fail_fast && !matches!(err, SimError::Cancelled { .. }) {
                        cancel.store(true, Ordering::Relaxed);
                    }
                }
            }
            ScenarioOutcome {
                name: scenario.name.clone(),
                run_id,
                result,
            }
        })
        .collect();
    Ok(outcomes)
}

fn run_one(
    scenario: &ScenarioConfig,
    fluid: &FluidEnvironment,
    cancel: &AtomicBool,
) -> Result<ScenarioReport, SimError> {
    // Everything is checked before the first step.
    let sim = Simulation::new(scenario.params())?;
    let floatation = scenario
        .hull_volume
        .map(|v| floatation(v, scenario.geometry.mass, fluid))
        .transpose()?;
    let pressure = scenario
        .operating_depth
        .map(|d| pressure(d, fluid))
        .transpose()?;

    let trajectory = sim.run_with_cancel(cancel)?;
    Ok(ScenarioReport {
        trajectory,
        floatation,
        pressure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn two_scenarios() -> Config {
        let mut cfg = Config::default();
        let mut second = cfg.scenarios[0].clone();
        second.name = "second".into();
        second.thrusters = dynamics::ThrusterArray::new([0.0, 5.0, 0.0, 5.0]);
        cfg.scenarios.push(second);
        cfg
    }

    #[test]
    fn outcomes_follow_file_order() {
        let cfg = two_scenarios();
        let out = run_batch(&cfg, &BatchOptions::default()).unwrap();
        let names: Vec<&str> = out.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["single-thruster", "second"]);
        assert!(out.iter().all(ScenarioOutcome::is_ok));
        assert_ne!(out[0].run_id, out[1].run_id);
    }

    #[test]
    fn filter_selects_one_scenario() {
        let cfg = two_scenarios();
        let opts = BatchOptions {
            only: Some("second".into()),
            ..Default::default()
        };
        let out = run_batch(&cfg, &opts).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "second");
    }

    #[test]
    fn unknown_filter_lists_known_names() {
        let cfg = two_scenarios();
        let opts = BatchOptions {
            only: Some("nope".into()),
            ..Default::default()
        };
        let err = run_batch(&cfg, &opts).unwrap_err().to_string();
        assert!(err.contains("single-thruster, second"), "{err}");
    }

    #[test]
    fn bad_scenario_fails_alone() {
        let mut cfg = two_scenarios();
        cfg.scenarios[1].geometry.horizontal_distance = -10.0;
        let out = run_batch(&cfg, &BatchOptions::default()).unwrap();
        assert!(out[0].is_ok());
        match &out[1].result {
            Err(err) => assert_eq!(err.field(), Some("horizontal_distance")),
            Ok(_) => panic!("negative lever arm should fail"),
        }
    }

    #[test]
    fn hydrostatic_checks_are_reported() {
        let text = r#"
            [[scenario]]
            name = "floaty"
            thrusters = [1.0, 1.0, 0.0, 0.0]
            time_step = 0.5
            time_final = 2.0
            hull_volume = 0.1
            operating_depth = 10.0

            [scenario.geometry]
            alpha = 0.5
            horizontal_distance = 1.0
            vertical_distance = 1.0
            mass = 50.0
            moment_of_inertia = 10.0
        "#;
        let cfg = parse_config(text).unwrap();
        let out = run_batch(&cfg, &BatchOptions::default()).unwrap();
        let report = out[0].result.as_ref().unwrap();
        assert_eq!(report.floatation, Some(Floatation::Floats));
        let p = report.pressure.unwrap();
        assert!((p - 98_100.0).abs() < 1e-6, "pressure={p}");
        assert_eq!(report.trajectory.len(), 4);
    }
}
