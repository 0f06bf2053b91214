use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no snake with id {0:?} on the board")]
    UnknownAgent(String),
    #[error("{0:?} is not one of up, right, down or left")]
    UnknownDirection(String),
    #[error("more than one snake has id {0:?}")]
    DuplicateAgent(String),
    #[error("snake {0:?} has an empty body")]
    EmptyBody(String),
    #[error("snake {id:?} has {health} hp, more than the maximum of {max}")]
    HealthOutOfRange { id: String, health: i64, max: i64 },
    #[error("snake {id:?} is inconsistent: {reason}")]
    InconsistentSnake { id: String, reason: String },
    #[error("a board must have positive extents, got {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
}
