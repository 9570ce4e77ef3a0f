use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("random choice requested over an empty set: {0}")]
    EmptyDomain(&'static str),

    #[error("{kind} {id} could not be resolved")]
    MissingReference { kind: &'static str, id: u32 },

    #[error("invariant violated for player {player_id}: {reason}")]
    InvariantViolation { player_id: u32, reason: String },

    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl SimulationError {
    pub fn missing_club(id: u32) -> Self {
        SimulationError::MissingReference { kind: "club", id }
    }

    pub fn missing_player(id: u32) -> Self {
        SimulationError::MissingReference { kind: "player", id }
    }

    pub fn missing_nation(id: u32) -> Self {
        SimulationError::MissingReference { kind: "nation", id }
    }
}

pub type SimulationResult<T> = Result<T, SimulationError>;

/// Failure of a commentary provider. Never leaves the match engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NarrativeError {
    #[error("commentary provider failed: {0}")]
    Provider(String),

    #[error("commentary provider returned blank text")]
    Blank,
}
