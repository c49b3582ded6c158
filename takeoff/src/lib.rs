//! # Takeoff
//!
//! Command-line runner for the quadcopter takeoff task.
//!
//! ## Overview
//!
//! The workspace is split into two library crates and this binary:
//!
//! -   **[`physics`]:** a rigid-body quadcopter simulator advanced one fixed
//!     timestep at a time from four rotor speeds.
//! -   **[`rl`]:** the reinforcement-learning side. [`rl::TakeoffTask`]
//!     wraps the simulator in a `reset`/`step` interface with action repeat,
//!     frame-stacked observations and a shaped takeoff reward.
//! -   **`takeoff`:** this crate. It loads a task configuration, flies a
//!     simple fixed or random rotor policy for a number of episodes, and
//!     logs a summary of each.
//!
//! ## Running
//!
//! ```text
//! takeoff --episodes 3 --policy random --seed 7
//! takeoff --config task.json --rotor-speed 420 --verbose
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG` to override the level.

pub mod app;
pub mod cli;
pub mod policy;

pub use physics;
pub use rl;
