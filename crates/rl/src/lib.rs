#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Takeoff RL Task
//!
//! Reinforcement-learning wrapper around the quadcopter [`physics`]
//! simulator. [`TakeoffTask`] exposes the usual `reset`/`step` interface:
//! each step holds one rotor command for several simulator timesteps,
//! stacks the intermediate poses into the observation and sums a shaped
//! reward that favours climbing to the target height with little drift.
//!
//! ```rust
//! use rl::{TakeoffTask, TaskConfig};
//!
//! let mut task = TakeoffTask::new(&TaskConfig::default())?;
//! let obs = task.reset();
//! assert_eq!(obs.len(), task.state_size());
//! let (obs, reward, done) = task.step(&[400.0; 4]);
//! assert_eq!(obs.len(), 36);
//! assert!(reward.is_finite());
//! assert!(!done);
//! # Ok::<(), rl::TaskError>(())
//! ```

pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod reward;
pub mod simulator;
pub mod task;

pub use config::{TaskConfig, DEFAULT_TARGET};
pub use env::Env;
pub use episode::{run_episode, EpisodeSummary};
pub use error::TaskError;
pub use reward::takeoff_reward;
pub use simulator::Simulator;
pub use task::{TakeoffTask, ACTION_HIGH, ACTION_LOW, ACTION_REPEAT, ACTION_SIZE, STATE_SIZE};
