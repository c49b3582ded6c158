use glam::DVec3;

/// Number of scalars in a [`Pose`].
pub const POSE_SIZE: usize = 6;

/// Number of rotors on the airframe.
pub const ROTOR_COUNT: usize = 4;

/// Commanded rotor speeds in revolutions per second, one per rotor.
pub type RotorSpeeds = [f64; ROTOR_COUNT];

/// Rigid-body configuration of the quadcopter: earth-frame position followed
/// by the roll, pitch and yaw Euler angles in radians.
///
/// The layout is `#[repr(C)]` so a slice of poses can be viewed as a flat
/// `f64` buffer (see [`Pose::as_slice`]).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Pose {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
        }
    }

    #[must_use]
    pub const fn from_array(values: [f64; POSE_SIZE]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4], values[5])
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; POSE_SIZE] {
        [self.x, self.y, self.z, self.roll, self.pitch, self.yaw]
    }

    #[must_use]
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn angles(&self) -> DVec3 {
        DVec3::new(self.roll, self.pitch, self.yaw)
    }

    #[must_use]
    pub fn from_parts(position: DVec3, angles: DVec3) -> Self {
        Self::new(position.x, position.y, position.z, angles.x, angles.y, angles.z)
    }

    /// View the pose as six contiguous scalars.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_finite())
    }
}

/// Initial conditions the simulator returns to on every reset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InitialConditions {
    pub pose: Pose,
    /// Earth-frame linear velocity in m/s.
    pub velocity: DVec3,
    /// Euler angle rates in rad/s.
    pub angular_velocity: DVec3,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            pose: Pose::new(0.0, 0.0, 10.0, 0.0, 0.0, 0.0),
            velocity: DVec3::ZERO,
            angular_velocity: DVec3::ZERO,
        }
    }
}

/// Physical constants of the airframe and the flight volume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadParams {
    /// Gravitational acceleration along earth z (m/s^2).
    pub gravity: f64,
    /// Air density (kg/m^3).
    pub air_density: f64,
    /// Mass (kg).
    pub mass: f64,
    /// Integration timestep (s).
    pub dt: f64,
    pub drag_coefficient: f64,
    /// Distance from the centre of mass to each rotor (m).
    pub arm_length: f64,
    /// Propeller diameter (m).
    pub propeller_size: f64,
    /// Body width, length and height (m).
    pub dims: DVec3,
    pub lower_bounds: DVec3,
    pub upper_bounds: DVec3,
}

impl Default for QuadParams {
    fn default() -> Self {
        let env_bounds = 300.0;
        Self {
            gravity: -9.81,
            air_density: 1.2,
            mass: 0.958,
            dt: 1.0 / 50.0,
            drag_coefficient: 0.3,
            arm_length: 0.4,
            propeller_size: 0.1,
            dims: DVec3::new(0.51, 0.51, 0.235),
            lower_bounds: DVec3::new(-env_bounds / 2.0, -env_bounds / 2.0, 0.0),
            upper_bounds: DVec3::new(env_bounds / 2.0, env_bounds / 2.0, env_bounds),
        }
    }
}

impl QuadParams {
    /// Cross-sectional areas facing the body x, y and z axes.
    #[must_use]
    pub fn areas(&self) -> DVec3 {
        let DVec3 { x: width, y: length, z: height } = self.dims;
        DVec3::new(length * height, width * height, width * length)
    }

    /// Principal moments of inertia of a solid box with the body dimensions.
    #[must_use]
    pub fn moments_of_inertia(&self) -> DVec3 {
        let DVec3 { x: width, y: length, z: height } = self.dims;
        let k = self.mass / 12.0;
        DVec3::new(
            k * (height * height + width * width),
            k * (height * height + length * length),
            k * (width * width + length * length),
        )
    }
}
