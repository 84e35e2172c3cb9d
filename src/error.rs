use thiserror::Error;

use crate::board::Location;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no mover token on the board")]
    MissingMover,
    #[error("{0} mover tokens on the board, expected exactly one")]
    MultipleMovers(usize),
    #[error("location {0} is outside the 6x6 board")]
    LocationOutOfRange(i64),
    #[error("two cards share location {0}")]
    DuplicateLocation(Location),
    #[error("unknown companion `{0}`")]
    UnknownCompanion(String),
    #[error("malformed move: {0}")]
    MoveShape(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
