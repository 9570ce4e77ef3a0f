use guildball_core::SimulationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("{0} is missing from the embedded reference data")]
    MissingFile(&'static str),

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid reference data: {0}")]
    InvalidData(String),

    #[error("save file io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file encoding error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
