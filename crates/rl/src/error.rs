use physics::PhysicsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("target position contains a non-finite value")]
    NonFiniteTarget,
    #[error("invalid task config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read task config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
