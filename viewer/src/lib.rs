use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use bevy::window::{Window, WindowPlugin};
use dynamics::{ThrusterArray, Trajectory, VehicleGeometry};
use runner::{load_config, run_batch, BatchOptions, ScenarioConfig, ScenarioOutcome};
use tracing::info;

pub mod args;
pub mod overlay;
pub mod playback;
pub mod scene;

pub use args::Args;
use overlay::OverlayPlugin;
pub use playback::{Playback, PlaybackPlugin, PlaybackSet};
use scene::ScenePlugin;

/// A finished run, ready to be drawn.
#[derive(Resource, Debug, Clone)]
pub struct LoadedRun {
    pub name: String,
    pub trajectory: Trajectory,
    pub geometry: VehicleGeometry,
    pub thrusters: ThrusterArray,
    /// Length of the sampled interval; playback wraps here (s).
    pub duration: f64,
}

impl LoadedRun {
    pub fn new(scenario: &ScenarioConfig, outcome: ScenarioOutcome) -> Result<Self> {
        let report = outcome
            .result
            .with_context(|| format!("scenario {} failed", outcome.name))?;
        Ok(Self {
            name: outcome.name,
            trajectory: report.trajectory,
            geometry: scenario.geometry,
            thrusters: scenario.thrusters,
            duration: scenario.time_final,
        })
    }
}

/// Load the scenario file and simulate the one scenario the viewer shows.
pub fn simulate(args: &Args) -> Result<(ScenarioConfig, ScenarioOutcome)> {
    let cfg = load_config(args.config.as_deref())?;
    let name = match &args.scenario {
        Some(name) => name.clone(),
        None => cfg
            .scenarios
            .first()
            .map(|s| s.name.clone())
            .context("scenario file is empty")?,
    };

    let opts = BatchOptions {
        only: Some(name.clone()),
        fail_fast: false,
    };
    let outcome = run_batch(&cfg, &opts)?
        .pop()
        .with_context(|| format!("scenario {name} produced no outcome"))?;
    let scenario = cfg
        .scenarios
        .into_iter()
        .find(|s| s.name == name)
        .with_context(|| format!("no scenario named {name:?}"))?;
    info!(scenario = %name, run_id = %outcome.run_id, "simulated scenario for viewing");
    Ok((scenario, outcome))
}

#[derive(Clone, Copy)]
struct ViewerAppConfig {
    include_rendering: bool,
}

impl ViewerAppConfig {
    const FULL: Self = Self {
        include_rendering: true,
    };

    const MINIMAL: Self = Self {
        include_rendering: false,
    };
}

pub fn build_viewer_app(args: &Args, run: LoadedRun) -> Result<App> {
    build_viewer_app_with_config(args, run, ViewerAppConfig::FULL)
}

/// Playback only: no window, no drawing.
pub fn build_minimal_viewer_app(args: &Args, run: LoadedRun) -> Result<App> {
    build_viewer_app_with_config(args, run, ViewerAppConfig::MINIMAL)
}

fn build_viewer_app_with_config(args: &Args, run: LoadedRun, config: ViewerAppConfig) -> Result<App> {
    if !(args.speed.is_finite() && args.speed > 0.0) {
        bail!("--speed must be a positive number, got {}", args.speed);
    }

    let mut app = App::new();
    if config.include_rendering {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: format!("auv-viewer: {}", run.name),
                ..Default::default()
            }),
            ..Default::default()
        }));
    } else {
        app.add_plugins(MinimalPlugins);
    }

    app.insert_resource(Playback::new(run.duration, args.speed))
        .insert_resource(run)
        .add_plugins(PlaybackPlugin);

    if config.include_rendering {
        app.add_plugins((ScenePlugin, OverlayPlugin));
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;
    use dynamics::{presets, Simulation};

    use super::*;

    fn args(speed: f64) -> Args {
        Args {
            config: None,
            scenario: None,
            speed,
            headless: false,
        }
    }

    fn demo_run() -> LoadedRun {
        let params = presets::ten_second_run([10.0, 0.0, 0.0, 0.0]);
        LoadedRun {
            name: "demo".into(),
            trajectory: Simulation::new(params).unwrap().run().unwrap(),
            geometry: params.geometry,
            thrusters: params.thrusters,
            duration: params.time_final,
        }
    }

    #[test]
    fn default_scenario_is_simulated() {
        let (scenario, outcome) = simulate(&args(1.0)).unwrap();
        assert_eq!(scenario.name, outcome.name);
        let run = LoadedRun::new(&scenario, outcome).unwrap();
        assert_eq!(run.trajectory.len(), 100);
        assert_eq!(run.duration, 10.0);
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let mut a = args(1.0);
        a.scenario = Some("missing".into());
        assert!(simulate(&a).is_err());
    }

    #[test]
    fn rejects_non_positive_speed() {
        assert!(build_minimal_viewer_app(&args(0.0), demo_run()).is_err());
        assert!(build_minimal_viewer_app(&args(f64::NAN), demo_run()).is_err());
    }

    #[test]
    fn minimal_app_advances_playback() {
        let mut app = build_minimal_viewer_app(&args(2.0), demo_run()).unwrap();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        for _ in 0..4 {
            app.update();
        }
        let pb = app.world().resource::<Playback>();
        assert!(pb.clock > 0.0 && pb.clock < pb.duration, "clock={}", pb.clock);
    }
}
