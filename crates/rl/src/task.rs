//! # Takeoff task
//!
//! [`TakeoffTask`] wraps a quadcopter [`Simulator`] in the reset/step
//! interface a training loop expects. Every external step repeats the same
//! rotor command for [`ACTION_REPEAT`] simulator timesteps, summing the
//! per-timestep reward and stacking the intermediate poses into one
//! observation of [`STATE_SIZE`] scalars.

use glam::DVec3;
use physics::{PhysicsSim, Pose, RotorSpeeds, POSE_SIZE, ROTOR_COUNT};

use crate::config::TaskConfig;
use crate::env::Env;
use crate::error::TaskError;
use crate::reward::reward_from_sim;
use crate::simulator::Simulator;

/// Simulator timesteps per external step.
pub const ACTION_REPEAT: usize = 6;
/// Observation length: one pose per repeated timestep.
pub const STATE_SIZE: usize = ACTION_REPEAT * POSE_SIZE;
pub const ACTION_SIZE: usize = ROTOR_COUNT;
/// Lowest rotor speed an agent should command (rev/s).
pub const ACTION_LOW: f64 = 0.0;
/// Highest rotor speed an agent should command (rev/s).
pub const ACTION_HIGH: f64 = 900.0;

/// Reach a target height starting from the simulator's initial pose.
///
/// Configuration is fixed at construction. The task does not validate or
/// clamp actions; keeping rotor speeds within
/// [`action_low`](Self::action_low)..=[`action_high`](Self::action_high) is
/// the caller's job.
#[derive(Clone, Debug)]
pub struct TakeoffTask<S = PhysicsSim> {
    sim: S,
    target_pos: DVec3,
}

impl TakeoffTask<PhysicsSim> {
    /// Build the task and its simulator from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError`] if the runtime or initial conditions are
    /// rejected by the simulator, or the target is not finite.
    pub fn new(config: &TaskConfig) -> Result<Self, TaskError> {
        let target_pos = config.target();
        if !target_pos.is_finite() {
            return Err(TaskError::NonFiniteTarget);
        }
        let sim = PhysicsSim::new(config.initial_conditions(), config.runtime)?;
        tracing::debug!(?target_pos, runtime = config.runtime, "takeoff task created");
        Ok(Self { sim, target_pos })
    }
}

impl<S: Simulator> TakeoffTask<S> {
    /// Wrap an existing simulator.
    #[must_use]
    pub fn with_simulator(sim: S, target_pos: DVec3) -> Self {
        Self { sim, target_pos }
    }

    /// Reset the simulator and return [`ACTION_REPEAT`] copies of its pose.
    pub fn reset(&mut self) -> Vec<f64> {
        self.sim.reset();
        let poses = [self.sim.pose(); ACTION_REPEAT];
        tracing::debug!(pose = ?poses[0], "takeoff task reset");
        bytemuck::cast_slice::<Pose, f64>(&poses).to_vec()
    }

    /// Apply `rotor_speeds` for [`ACTION_REPEAT`] simulator timesteps.
    ///
    /// Returns the stacked poses, the reward summed over every timestep and
    /// the termination flag of the final timestep. All timesteps run even if
    /// an earlier one reported the end of the episode.
    pub fn step(&mut self, rotor_speeds: &RotorSpeeds) -> (Vec<f64>, f64, bool) {
        let mut reward = 0.0;
        let mut done = false;
        let mut poses = [Pose::default(); ACTION_REPEAT];
        for pose in &mut poses {
            done = self.sim.next_timestep(rotor_speeds);
            reward += self.reward();
            *pose = self.sim.pose();
        }
        tracing::trace!(reward, done, "takeoff task step");
        (bytemuck::cast_slice::<Pose, f64>(&poses).to_vec(), reward, done)
    }

    /// Reward for the simulator's current state.
    #[must_use]
    pub fn reward(&self) -> f64 {
        reward_from_sim(&self.sim, self.target_pos)
    }

    #[must_use]
    pub fn target_pos(&self) -> DVec3 {
        self.target_pos
    }

    #[must_use]
    pub fn sim(&self) -> &S {
        &self.sim
    }

    #[must_use]
    pub fn action_repeat(&self) -> usize {
        ACTION_REPEAT
    }

    #[must_use]
    pub fn state_size(&self) -> usize {
        STATE_SIZE
    }

    #[must_use]
    pub fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    #[must_use]
    pub fn action_low(&self) -> f64 {
        ACTION_LOW
    }

    #[must_use]
    pub fn action_high(&self) -> f64 {
        ACTION_HIGH
    }
}

impl<S: Simulator> Env for TakeoffTask<S> {
    type Action = RotorSpeeds;

    fn step(&mut self, action: &RotorSpeeds) -> (Vec<f64>, f64, bool) {
        TakeoffTask::step(self, action)
    }

    fn reset(&mut self) -> Vec<f64> {
        TakeoffTask::reset(self)
    }

    fn obs_size(&self) -> usize {
        STATE_SIZE
    }

    fn action_size(&self) -> usize {
        ACTION_SIZE
    }
}
