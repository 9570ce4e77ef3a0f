use guildball_core::SimulationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("a day advance is already in flight")]
    Busy,

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("simulation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
