//! Headless batch runner: loads scenarios from TOML and simulates them side by side.

use std::path::PathBuf;

use clap::Parser;

mod batch;
mod config;
mod report;

pub use batch::{run_batch, BatchOptions, ScenarioOutcome, ScenarioReport};
pub use config::{load_config, parse_config, Config, ScenarioConfig};
pub use report::{sample_rows, summary_line, SAMPLE_HEADER};

#[derive(Parser, Debug, Clone)]
#[command(name = "auv-runner")]
#[command(about = "Run planar AUV thruster scenarios and summarize the trajectories", long_about = None)]
pub struct Args {
    /// Scenario file (TOML). Runs the built-in demo scenario when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Only run the scenario with this name
    #[arg(long)]
    pub scenario: Option<String>,
    /// Cancel in-flight runs as soon as one scenario fails
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
    /// Also print every n-th trajectory sample
    #[arg(long)]
    pub sample_every: Option<usize>,
}

impl From<&Args> for BatchOptions {
    fn from(args: &Args) -> Self {
        Self {
            only: args.scenario.clone(),
            fail_fast: args.fail_fast,
        }
    }
}
