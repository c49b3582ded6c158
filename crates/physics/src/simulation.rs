//! # Quadcopter Simulation Core
//!
//! [`PhysicsSim`] holds the rigid-body state of a single quadcopter and
//! advances it one fixed timestep at a time from commanded rotor speeds.
//! Thrust follows a propeller model with inflow-dependent thrust
//! coefficient; linear and rotational drag act on the box-shaped body.

use crate::error::PhysicsError;
use crate::integrator::{clamp_to_bounds, integrate_angular, integrate_linear};
use crate::transform::{body_to_earth, earth_to_body};
use crate::types::{InitialConditions, Pose, QuadParams, RotorSpeeds, ROTOR_COUNT};
use glam::DVec3;

/// Default episode length in seconds.
pub const DEFAULT_RUNTIME: f64 = 5.0;

/// Main quadcopter simulation container
#[derive(Clone, Debug)]
pub struct PhysicsSim {
    params: QuadParams,
    initial: InitialConditions,
    runtime: f64,

    time: f64,
    pose: Pose,
    velocity: DVec3,
    angular_velocity: DVec3,
    linear_accel: DVec3,
    angular_accels: DVec3,
    prop_wind_speed: [f64; ROTOR_COUNT],
    done: bool,
}

impl Default for PhysicsSim {
    fn default() -> Self {
        Self::from_validated(QuadParams::default(), InitialConditions::default(), DEFAULT_RUNTIME)
    }
}

impl PhysicsSim {
    /// Create a simulation starting from `initial` whose episodes end once
    /// `runtime` seconds have elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError`] if `runtime` is not a positive finite number
    /// or an initial condition contains NaN or infinity.
    pub fn new(initial: InitialConditions, runtime: f64) -> Result<Self, PhysicsError> {
        Self::with_params(QuadParams::default(), initial, runtime)
    }

    /// Like [`PhysicsSim::new`] with custom airframe constants.
    ///
    /// # Errors
    ///
    /// See [`PhysicsSim::new`].
    pub fn with_params(
        params: QuadParams,
        initial: InitialConditions,
        runtime: f64,
    ) -> Result<Self, PhysicsError> {
        if !runtime.is_finite() || runtime <= 0.0 {
            return Err(PhysicsError::InvalidRuntime(runtime));
        }
        if !initial.pose.is_finite() {
            return Err(PhysicsError::NonFiniteInitialCondition("pose"));
        }
        if !initial.velocity.is_finite() {
            return Err(PhysicsError::NonFiniteInitialCondition("velocity"));
        }
        if !initial.angular_velocity.is_finite() {
            return Err(PhysicsError::NonFiniteInitialCondition("angular velocity"));
        }
        Ok(Self::from_validated(params, initial, runtime))
    }

    fn from_validated(params: QuadParams, initial: InitialConditions, runtime: f64) -> Self {
        let mut sim = Self {
            params,
            initial,
            runtime,
            time: 0.0,
            pose: initial.pose,
            velocity: initial.velocity,
            angular_velocity: initial.angular_velocity,
            linear_accel: DVec3::ZERO,
            angular_accels: DVec3::ZERO,
            prop_wind_speed: [0.0; ROTOR_COUNT],
            done: false,
        };
        sim.reset();
        sim
    }

    /// Return to the initial conditions and clear the episode clock.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.pose = self.initial.pose;
        self.velocity = self.initial.velocity;
        self.angular_velocity = self.initial.angular_velocity;
        self.linear_accel = DVec3::ZERO;
        self.angular_accels = DVec3::ZERO;
        self.prop_wind_speed = [0.0; ROTOR_COUNT];
        self.done = false;
        tracing::debug!(pose = ?self.pose, runtime = self.runtime, "simulation reset");
    }

    /// Advance one timestep with the given rotor speeds.
    ///
    /// Returns `true` once the episode has ended, either because the
    /// quadcopter left the flight volume or because the runtime elapsed.
    /// The flag stays set until [`PhysicsSim::reset`].
    pub fn next_timestep(&mut self, rotor_speeds: &RotorSpeeds) -> bool {
        let p = self.params;
        let body_velocity =
            earth_to_body(self.pose.roll, self.pose.pitch, self.pose.yaw) * self.velocity;

        self.prop_wind_speed =
            prop_wind_speeds(body_velocity, self.angular_velocity, p.arm_length);
        let thrusts = propeller_thrusts(&p, rotor_speeds, &self.prop_wind_speed);

        self.linear_accel = self.linear_forces(&thrusts, body_velocity) / p.mass;
        let (position, velocity) =
            integrate_linear(self.pose.position(), self.velocity, self.linear_accel, p.dt);
        self.velocity = velocity;

        self.angular_accels = self.moments(&thrusts) / p.moments_of_inertia();
        let (angles, angular_velocity) = integrate_angular(
            self.pose.angles(),
            self.angular_velocity,
            self.angular_accels,
            p.dt,
        );
        self.angular_velocity = angular_velocity;

        let (position, out_of_bounds) = clamp_to_bounds(position, p.lower_bounds, p.upper_bounds);
        if out_of_bounds && !self.done {
            tracing::info!(?position, time = self.time, "quadcopter left the flight volume");
        }
        self.done |= out_of_bounds;

        self.pose = Pose::from_parts(position, angles);
        self.time += p.dt;
        if self.time > self.runtime {
            self.done = true;
        }
        self.done
    }

    /// Net earth-frame force: body thrust minus drag, rotated, plus gravity.
    fn linear_forces(&self, thrusts: &[f64; ROTOR_COUNT], body_velocity: DVec3) -> DVec3 {
        let p = &self.params;
        let thrust_body = DVec3::new(0.0, 0.0, thrusts.iter().sum());
        let drag_body = 0.5
            * p.air_density
            * p.drag_coefficient
            * p.areas()
            * body_velocity
            * body_velocity.abs();
        let to_earth = body_to_earth(self.pose.roll, self.pose.pitch, self.pose.yaw);
        to_earth * (thrust_body - drag_body) + DVec3::new(0.0, 0.0, p.mass * p.gravity)
    }

    /// Moments from differential thrust minus rotational drag.
    fn moments(&self, thrusts: &[f64; ROTOR_COUNT]) -> DVec3 {
        let p = &self.params;
        let thrust_moment = DVec3::new(
            (thrusts[3] - thrusts[2]) * p.arm_length,
            (thrusts[1] - thrusts[0]) * p.arm_length,
            0.0,
        );
        let w = self.angular_velocity;
        let drag_moment =
            p.drag_coefficient * 0.5 * p.air_density * w * w.abs() * p.areas() * p.dims * p.dims;
        thrust_moment - drag_moment
    }

    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Earth-frame linear acceleration from the most recent timestep.
    #[must_use]
    pub fn linear_accel(&self) -> DVec3 {
        self.linear_accel
    }

    /// Euler-angle accelerations from the most recent timestep.
    #[must_use]
    pub fn angular_accels(&self) -> DVec3 {
        self.angular_accels
    }

    #[must_use]
    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    #[must_use]
    pub fn angular_velocity(&self) -> DVec3 {
        self.angular_velocity
    }

    #[must_use]
    pub fn prop_wind_speed(&self) -> [f64; ROTOR_COUNT] {
        self.prop_wind_speed
    }

    /// Simulated seconds since the last reset.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn runtime(&self) -> f64 {
        self.runtime
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn params(&self) -> &QuadParams {
        &self.params
    }

    #[must_use]
    pub fn initial_conditions(&self) -> &InitialConditions {
        &self.initial
    }
}

/// Axial inflow speed through each propeller disc.
///
/// Rotors 0/1 sit on the pitch axis and 2/3 on the roll axis, so body rates
/// add or subtract `rate * arm_length` to the body-frame vertical velocity.
fn prop_wind_speeds(
    body_velocity: DVec3,
    angular_velocity: DVec3,
    arm_length: f64,
) -> [f64; ROTOR_COUNT] {
    let pitch_term = angular_velocity.y * arm_length;
    let roll_term = angular_velocity.x * arm_length;
    [
        body_velocity.z + pitch_term,
        body_velocity.z - pitch_term,
        body_velocity.z + roll_term,
        body_velocity.z - roll_term,
    ]
}

/// Net thrust per rotor, `C_T * rho * n^2 * D^4`.
///
/// The thrust coefficient falls off with the advance ratio `J = V * D / n`
/// and never goes negative. A stopped rotor produces no thrust.
fn propeller_thrusts(
    p: &QuadParams,
    rotor_speeds: &RotorSpeeds,
    wind_speeds: &[f64; ROTOR_COUNT],
) -> [f64; ROTOR_COUNT] {
    let d = p.propeller_size;
    let mut thrusts = [0.0; ROTOR_COUNT];
    for ((thrust, &n), &v) in thrusts.iter_mut().zip(rotor_speeds).zip(wind_speeds) {
        let j = if n == 0.0 { 0.0 } else { (v / n * d).max(0.0) };
        let c_t = (0.12 - 0.07 * j - 0.1 * j * j).max(0.0);
        *thrust = c_t * p.air_density * n * n * d.powi(4);
    }
    thrusts
}
