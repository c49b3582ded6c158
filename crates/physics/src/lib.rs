#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Quadcopter Physics
//!
//! A small rigid-body simulator for a single quadcopter, advanced one fixed
//! timestep at a time from four commanded rotor speeds.
//!
//! ## Key Components
//!
//! -   **State:** [`Pose`] (position plus roll/pitch/yaw) together with the
//!     linear and angular velocities and accelerations, all held by
//!     [`PhysicsSim`].
//! -   **Forces:** per-rotor propeller thrust that weakens with axial inflow,
//!     quadratic linear drag on the box-shaped body, gravity, and
//!     differential-thrust moments opposed by rotational drag.
//! -   **Episodes:** a simulation ends when the quadcopter leaves the flight
//!     volume (touching the ground included) or when the configured runtime
//!     has elapsed. [`PhysicsSim::reset`] restores the initial conditions.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{InitialConditions, PhysicsSim};
//!
//! let mut sim = PhysicsSim::new(InitialConditions::default(), 5.0)?;
//! let mut done = false;
//! while !done {
//!     done = sim.next_timestep(&[400.0; 4]);
//! }
//! assert!(sim.time() > 5.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod error;
pub mod integrator;
pub mod simulation;
pub mod transform;
pub mod types;

pub use error::PhysicsError;
pub use simulation::{PhysicsSim, DEFAULT_RUNTIME};
pub use types::{InitialConditions, Pose, QuadParams, RotorSpeeds, POSE_SIZE, ROTOR_COUNT};
