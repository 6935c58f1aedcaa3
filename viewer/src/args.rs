use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "auv-viewer")]
#[command(about = "Animate one planar AUV scenario", long_about = None)]
pub struct Args {
    /// Scenario file (TOML). Uses the built-in demo scenario when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Scenario to show; defaults to the first one in the file
    #[arg(long)]
    pub scenario: Option<String>,
    /// Simulated seconds per wall-clock second
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,
    /// Print the run summary instead of opening a window
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}
