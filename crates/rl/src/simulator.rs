//! The narrow view of a quadcopter simulator that tasks depend on.

use physics::{PhysicsSim, Pose, RotorSpeeds};

/// Simulator state and controls consumed by a task.
///
/// Telemetry accessors report the state after the most recent
/// [`Simulator::next_timestep`] (or the reset state).
pub trait Simulator {
    /// Return to the initial conditions.
    fn reset(&mut self);

    /// Advance one timestep, returning whether the episode has ended.
    fn next_timestep(&mut self, rotor_speeds: &RotorSpeeds) -> bool;

    fn pose(&self) -> Pose;

    fn linear_accel(&self) -> [f64; 3];

    fn angular_accels(&self) -> [f64; 3];
}

impl Simulator for PhysicsSim {
    fn reset(&mut self) {
        PhysicsSim::reset(self);
    }

    fn next_timestep(&mut self, rotor_speeds: &RotorSpeeds) -> bool {
        PhysicsSim::next_timestep(self, rotor_speeds)
    }

    fn pose(&self) -> Pose {
        PhysicsSim::pose(self)
    }

    fn linear_accel(&self) -> [f64; 3] {
        PhysicsSim::linear_accel(self).to_array()
    }

    fn angular_accels(&self) -> [f64; 3] {
        PhysicsSim::angular_accels(self).to_array()
    }
}
