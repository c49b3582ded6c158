//! Task construction parameters.
//!
//! Every field is optional in JSON; missing fields take the defaults below.
//!
//! ```json
//! {
//!   "init_pose": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
//!   "runtime": 5.0,
//!   "target_pos": [0.0, 0.0, 10.0]
//! }
//! ```

use glam::DVec3;
use physics::{InitialConditions, Pose, DEFAULT_RUNTIME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::TaskError;

/// Height the takeoff task aims for when no target is configured.
pub const DEFAULT_TARGET: DVec3 = DVec3::new(0.0, 0.0, 10.0);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Starting position and Euler angles. `None` uses the simulator default.
    pub init_pose: Option<[f64; 6]>,
    /// Starting earth-frame velocity (m/s).
    pub init_velocities: [f64; 3],
    /// Starting Euler angle rates (rad/s). `None` means at rest.
    pub init_angle_velocities: Option<[f64; 3]>,
    /// Episode time limit in seconds.
    pub runtime: f64,
    /// Goal position. `None` uses [`DEFAULT_TARGET`].
    pub target_pos: Option<[f64; 3]>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            init_pose: None,
            init_velocities: [0.0; 3],
            init_angle_velocities: None,
            runtime: DEFAULT_RUNTIME,
            target_pos: None,
        }
    }
}

impl TaskConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Config`] on malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, TaskError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] if the file cannot be read and
    /// [`TaskError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TaskError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TaskError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Simulator initial conditions described by this config.
    #[must_use]
    pub fn initial_conditions(&self) -> InitialConditions {
        let defaults = InitialConditions::default();
        InitialConditions {
            pose: self.init_pose.map_or(defaults.pose, Pose::from_array),
            velocity: DVec3::from_array(self.init_velocities),
            angular_velocity: self
                .init_angle_velocities
                .map_or(defaults.angular_velocity, DVec3::from_array),
        }
    }

    /// Goal position, falling back to [`DEFAULT_TARGET`].
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.target_pos.map_or(DEFAULT_TARGET, DVec3::from_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = TaskConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TaskConfig::default());
        assert_eq!(config.target(), DEFAULT_TARGET);
        assert_eq!(config.initial_conditions(), InitialConditions::default());
    }

    #[test]
    fn partial_config_overrides_fields() {
        let config = TaskConfig::from_json_str(
            r#"{ "init_pose": [1, 2, 3, 0, 0, 0], "runtime": 2.5, "target_pos": [0, 0, 50] }"#,
        )
        .unwrap();
        assert_eq!(config.runtime, 2.5);
        assert_eq!(config.target(), DVec3::new(0.0, 0.0, 50.0));
        assert_eq!(config.initial_conditions().pose, Pose::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = TaskConfig::from_json_str(r#"{ "action_repeat": 3 }"#).unwrap_err();
        assert!(matches!(err, TaskError::Config(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = TaskConfig::from_file("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn defaults_are_not_shared_between_configs() {
        let mut a = TaskConfig::default();
        let b = TaskConfig::default();
        a.init_velocities[2] = 3.0;
        assert_eq!(b.init_velocities, [0.0; 3]);
    }
}
