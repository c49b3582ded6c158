//! # Rigid-body integration
//!
//! Constant-acceleration updates for position/velocity and Euler angles,
//! plus the flight-volume clamp.

use crate::transform::wrap_angle;
use glam::DVec3;

/// Advance a position and velocity over `dt` under constant acceleration.
#[must_use]
pub fn integrate_linear(
    position: DVec3,
    velocity: DVec3,
    accel: DVec3,
    dt: f64,
) -> (DVec3, DVec3) {
    let next_position = position + velocity * dt + 0.5 * accel * dt * dt;
    let next_velocity = velocity + accel * dt;
    (next_position, next_velocity)
}

/// Advance Euler angles and their rates over `dt`. Angles are wrapped into `[0, 2π)`.
#[must_use]
pub fn integrate_angular(angles: DVec3, rates: DVec3, accel: DVec3, dt: f64) -> (DVec3, DVec3) {
    let raw = angles + rates * dt + 0.5 * accel * dt * dt;
    let next_angles = DVec3::new(wrap_angle(raw.x), wrap_angle(raw.y), wrap_angle(raw.z));
    (next_angles, rates + accel * dt)
}

/// Clamp a position into the flight volume.
///
/// Returns the clamped position and whether any axis touched or crossed a
/// boundary. Reaching the lower bound counts as leaving the volume.
#[must_use]
pub fn clamp_to_bounds(position: DVec3, lower: DVec3, upper: DVec3) -> (DVec3, bool) {
    let mut clamped = position.to_array();
    let mut out_of_bounds = false;
    for ((value, lo), hi) in clamped.iter_mut().zip(lower.to_array()).zip(upper.to_array()) {
        if *value <= lo {
            *value = lo;
            out_of_bounds = true;
        } else if *value > hi {
            *value = hi;
            out_of_bounds = true;
        }
    }
    (DVec3::from_array(clamped), out_of_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_acceleration_step() {
        let (p, v) = integrate_linear(
            DVec3::ZERO,
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, -2.0),
            0.5,
        );
        assert_eq!(p, DVec3::new(0.5, 0.0, -0.25));
        assert_eq!(v, DVec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_ground_contact_is_out_of_bounds() {
        let lower = DVec3::new(-1.0, -1.0, 0.0);
        let upper = DVec3::splat(1.0);
        let (p, out) = clamp_to_bounds(DVec3::new(0.0, 0.0, 0.0), lower, upper);
        assert!(out);
        assert_eq!(p.z, 0.0);

        let (p, out) = clamp_to_bounds(DVec3::new(0.5, 2.0, 0.5), lower, upper);
        assert!(out);
        assert_eq!(p, DVec3::new(0.5, 1.0, 0.5));

        let (_, out) = clamp_to_bounds(DVec3::new(1.0, 1.0, 1.0), lower, upper);
        assert!(!out);
    }

    #[test]
    fn test_angles_wrap() {
        let (a, r) = integrate_angular(DVec3::ZERO, DVec3::new(-1.0, 0.0, 0.0), DVec3::ZERO, 0.1);
        assert!(a.x > 6.0 && a.x < std::f64::consts::TAU);
        assert_eq!(r.x, -1.0);
    }
}
