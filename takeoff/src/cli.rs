use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Rotor policy flown during each episode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Every rotor at `--rotor-speed`.
    Hover,
    /// Rotor speeds drawn uniformly from the task's action bounds each step.
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "takeoff", version, about = "Fly the quadcopter takeoff task")]
pub struct Args {
    /// JSON task configuration; defaults are used for missing fields.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the episode runtime in seconds.
    #[arg(long)]
    pub runtime: Option<f64>,

    /// Override the target position.
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub target: Option<Vec<f64>>,

    #[arg(long, default_value_t = 1)]
    pub episodes: usize,

    /// Upper bound on external steps per episode.
    #[arg(long, default_value_t = 1_000)]
    pub max_steps: usize,

    #[arg(long, value_enum, default_value_t = PolicyKind::Hover)]
    pub policy: PolicyKind,

    /// Rotor speed (rev/s) for the hover policy.
    #[arg(long, default_value_t = 400.0)]
    pub rotor_speed: f64,

    /// Seed for the random policy.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Log every task step.
    #[arg(short, long)]
    pub verbose: bool,
}
