use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("episode runtime must be finite and positive, got {0}")]
    InvalidRuntime(f64),
    #[error("initial {0} contains a non-finite value")]
    NonFiniteInitialCondition(&'static str),
}
