use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use runner::{load_config, run_batch, sample_rows, summary_line, Args, BatchOptions, SAMPLE_HEADER};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    info!(?cfg, "Scenario config loaded");

    let outcomes = run_batch(&cfg, &BatchOptions::from(&args))?;
    for outcome in &outcomes {
        println!("{}", summary_line(outcome));
        if let (Some(every), Ok(report)) = (args.sample_every, &outcome.result) {
            println!("{SAMPLE_HEADER}");
            for row in sample_rows(&report.trajectory, every) {
                println!("{row}");
            }
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        bail!("{failed} of {} scenarios failed", outcomes.len());
    }
    Ok(())
}
