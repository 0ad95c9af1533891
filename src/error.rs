use crate::id::{GameId, PhaseId, PlayerId, TeamId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("team {0} not found")]
    TeamNotFound(TeamId),

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("game {0} not found")]
    GameNotFound(GameId),

    #[error("phase {0} not found")]
    PhaseNotFound(PhaseId),

    #[error("import error: {0}")]
    Import(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
