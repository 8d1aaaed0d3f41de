use stacker_data::BlankName;
use thiserror::Error;

use crate::gameplay::RoundPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameErrorKind {
    Identity,
    Lookup,
    State,
    Storage,
    Config,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player name must not be blank")]
    InvalidIdentity,

    #[error("no player record stored under {name:?}")]
    NotFound { name: String },

    #[error("round is not accepting stops (phase {phase:?})")]
    InvalidState { phase: RoundPhase },

    /// Backend failure, carrying the rendered error chain.
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl GameError {
    pub fn kind(&self) -> GameErrorKind {
        match self {
            GameError::InvalidIdentity => GameErrorKind::Identity,
            GameError::NotFound { .. } => GameErrorKind::Lookup,
            GameError::InvalidState { .. } => GameErrorKind::State,
            GameError::Storage(_) => GameErrorKind::Storage,
            GameError::InvalidConfig(_) => GameErrorKind::Config,
        }
    }

    pub(crate) fn storage(err: anyhow::Error) -> Self {
        GameError::Storage(format!("{err:#}"))
    }
}

impl From<BlankName> for GameError {
    fn from(_: BlankName) -> Self {
        GameError::InvalidIdentity
    }
}

pub type GameResult<T> = Result<T, GameError>;
