//! Frame conversions between the earth frame and the quadcopter body frame.
//!
//! Orientation is stored as roll/pitch/yaw Euler angles applied in yaw, pitch,
//! roll order (intrinsic Z-Y-X).

use glam::{DMat3, EulerRot};
use std::f64::consts::TAU;

/// Rotation taking body-frame vectors into the earth frame.
#[must_use]
pub fn body_to_earth(roll: f64, pitch: f64, yaw: f64) -> DMat3 {
    DMat3::from_euler(EulerRot::ZYX, yaw, pitch, roll)
}

/// Rotation taking earth-frame vectors into the body frame.
#[must_use]
pub fn earth_to_body(roll: f64, pitch: f64, yaw: f64) -> DMat3 {
    body_to_earth(roll, pitch, yaw).transpose()
}

/// Wrap an angle into `[0, 2π)`.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_level_attitude_is_identity() {
        let r = body_to_earth(0.0, 0.0, 0.0);
        assert_eq!(r, DMat3::IDENTITY);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let r = body_to_earth(0.0, 0.0, FRAC_PI_2);
        let v = r * DVec3::X;
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pitch_row_matches_zyx_convention() {
        let (roll, pitch, yaw) = (0.3, -0.2, 1.1);
        let r = body_to_earth(roll, pitch, yaw);
        // third row of Rz * Ry * Rx
        assert_relative_eq!(r.row(2).x, -pitch.sin(), epsilon = 1e-12);
        assert_relative_eq!(r.row(2).y, pitch.cos() * roll.sin(), epsilon = 1e-12);
        assert_relative_eq!(r.row(2).z, pitch.cos() * roll.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_between_frames() {
        let v = DVec3::new(1.0, -2.0, 0.5);
        let back = body_to_earth(0.4, 0.1, -0.7) * (earth_to_body(0.4, 0.1, -0.7) * v);
        assert_relative_eq!(back.x, v.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-12);
        assert_relative_eq!(back.z, v.z, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_angle() {
        assert_relative_eq!(wrap_angle(-0.5), TAU - 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(TAU + 0.25), 0.25, epsilon = 1e-12);
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!(wrap_angle(-1e-300) < TAU);
    }
}
