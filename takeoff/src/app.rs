//! # Episode runner
//!
//! Builds a [`TakeoffTask`] from the command line, then flies the selected
//! [`Policy`] for the requested number of episodes, logging a summary of
//! each one.

use anyhow::{bail, Context, Result};
use physics::POSE_SIZE;
use rl::{run_episode, EpisodeSummary, TakeoffTask, TaskConfig};

use crate::cli::{Args, PolicyKind};
use crate::policy::Policy;

/// Task configuration from `--config`, with command-line overrides applied.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed.
pub fn task_config(args: &Args) -> Result<TaskConfig> {
    let mut config = match &args.config {
        Some(path) => TaskConfig::from_file(path)
            .with_context(|| format!("loading task config from {}", path.display()))?,
        None => TaskConfig::default(),
    };
    if let Some(runtime) = args.runtime {
        config.runtime = runtime;
    }
    if let Some(target) = &args.target {
        let Ok(target) = <[f64; 3]>::try_from(target.as_slice()) else {
            bail!("--target expects exactly three values, got {}", target.len());
        };
        config.target_pos = Some(target);
    }
    Ok(config)
}

/// Run every requested episode and return their summaries.
///
/// # Errors
///
/// Returns an error if the task cannot be constructed from the configuration.
pub fn run(args: &Args) -> Result<Vec<EpisodeSummary>> {
    let config = task_config(args)?;
    let mut task = TakeoffTask::new(&config).context("building takeoff task")?;
    let mut policy = match args.policy {
        PolicyKind::Hover => Policy::hover(args.rotor_speed),
        PolicyKind::Random => Policy::random(args.seed),
    };

    tracing::info!(
        "Flying {} episode(s) with {:?} policy, target {:?}, runtime {} s",
        args.episodes,
        args.policy,
        task.target_pos(),
        config.runtime
    );

    let mut summaries = Vec::with_capacity(args.episodes);
    for episode in 0..args.episodes {
        let summary = run_episode(&mut task, |obs| policy.act(obs), args.max_steps);
        let height = summary
            .final_obs
            .chunks(POSE_SIZE)
            .last()
            .map_or(f64::NAN, |pose| pose[2]);
        tracing::info!(
            episode,
            steps = summary.steps,
            total_reward = summary.total_reward,
            terminated = summary.terminated,
            height,
            "episode finished"
        );
        if !summary.terminated {
            tracing::warn!(episode, "episode hit the step limit before the task ended");
        }
        summaries.push(summary);
    }
    Ok(summaries)
}
