//! # Takeoff runner
//!
//! Entry point for the `takeoff` binary. See the crate documentation for the
//! available flags.

use anyhow::Result;
use clap::Parser;
use takeoff::{app, cli::Args};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let summaries = app::run(&args)?;
    let mean_reward = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|s| s.total_reward).sum::<f64>() / summaries.len() as f64
    };
    tracing::info!("Finished {} episode(s), mean reward {:.3}", summaries.len(), mean_reward);
    Ok(())
}

/// Install the fmt subscriber, honouring `RUST_LOG` when it is set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "trace" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
