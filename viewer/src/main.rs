use anyhow::{bail, Result};
use clap::Parser;

use runner::summary_line;
use viewer::{build_viewer_app, simulate, Args, LoadedRun};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let (scenario, outcome) = simulate(&args)?;
    if args.headless {
        println!("{}", summary_line(&outcome));
        if !outcome.is_ok() {
            bail!("scenario {} failed", outcome.name);
        }
        return Ok(());
    }

    let run = LoadedRun::new(&scenario, outcome)?;
    let mut app = build_viewer_app(&args, run)?;
    app.run();
    Ok(())
}
