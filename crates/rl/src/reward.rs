//! Takeoff reward shaping.
//!
//! Each simulator timestep earns roughly one point, nudged by
//! - the summed linear and angular accelerations,
//! - the horizontal distance from the target (added, so drift raises the
//!   reward), and
//! - the *signed* height error, so flying above the target height scores
//!   higher than flying below it.

use glam::DVec3;
use physics::Pose;

use crate::simulator::Simulator;

/// Reward earned for every timestep before shaping.
pub const BASE_REWARD: f64 = 1.0;
/// Scale applied to the summed accelerations.
pub const ACCEL_WEIGHT: f64 = 0.001;
/// Scale applied to the position error terms.
pub const POSITION_WEIGHT: f64 = 0.001;
/// Constant offset inside the horizontal drift term.
pub const DRIFT_OFFSET: f64 = -0.1;

/// Reward for a single simulator timestep.
#[must_use]
pub fn takeoff_reward(
    pose: &Pose,
    target: DVec3,
    linear_accel: [f64; 3],
    angular_accels: [f64; 3],
) -> f64 {
    let x_error = (pose.x - target.x).abs();
    let y_error = (pose.y - target.y).abs();
    // deliberately signed: overshooting the target height is rewarded
    let z_error = pose.z - target.z;

    let accel_sum: f64 = linear_accel.iter().chain(angular_accels.iter()).sum();
    let base = BASE_REWARD + ACCEL_WEIGHT * accel_sum;
    let penalty =
        POSITION_WEIGHT * (DRIFT_OFFSET + y_error + x_error) + POSITION_WEIGHT * z_error;
    base + penalty
}

/// [`takeoff_reward`] evaluated on the simulator's current telemetry.
#[must_use]
pub fn reward_from_sim<S: Simulator + ?Sized>(sim: &S, target: DVec3) -> f64 {
    takeoff_reward(&sim.pose(), target, sim.linear_accel(), sim.angular_accels())
}
