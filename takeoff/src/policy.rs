//! Fixed rotor policies used to exercise the task without a learner.

use physics::{RotorSpeeds, ROTOR_COUNT};
use rl::{ACTION_HIGH, ACTION_LOW};

pub enum Policy {
    /// The same speed on every rotor.
    Hover { rotor_speed: f64 },
    /// Independent uniform speeds in `[low, high)` every step.
    Random {
        rng: fastrand::Rng,
        low: f64,
        high: f64,
    },
}

impl Policy {
    #[must_use]
    pub fn hover(rotor_speed: f64) -> Self {
        Self::Hover { rotor_speed }
    }

    /// Uniform policy over the takeoff task's action bounds.
    #[must_use]
    pub fn random(seed: u64) -> Self {
        Self::Random {
            rng: fastrand::Rng::with_seed(seed),
            low: ACTION_LOW,
            high: ACTION_HIGH,
        }
    }

    pub fn act(&mut self, _obs: &[f64]) -> RotorSpeeds {
        match self {
            Self::Hover { rotor_speed } => [*rotor_speed; ROTOR_COUNT],
            Self::Random { rng, low, high } => {
                let mut speeds = [0.0; ROTOR_COUNT];
                for s in &mut speeds {
                    *s = *low + rng.f64() * (*high - *low);
                }
                speeds
            }
        }
    }
}
