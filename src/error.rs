//! Error types.
//!
//! Every error here is resolved by `GameController` into a status and a
//! message. They are public so hosts can use `try_submit` and the
//! dictionary sources directly with `?`.

use thiserror::Error;

use crate::core::Message;
use crate::rules::{Rejection, Termination};

/// Failure to produce a dictionary from its source.
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("failed to read dictionary source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dictionary source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dictionary source contains no usable words")]
    Empty,
}

/// Errors from game operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("dictionary unavailable: {0}")]
    DictionaryLoad(#[from] DictionaryLoadError),

    #[error("dictionary not loaded")]
    NotReady,

    #[error("no valid starting word found")]
    NoStartWordFound,

    #[error("input is blank")]
    BlankInput,

    #[error("game has already ended")]
    GameEnded,

    #[error("invalid move: {0}")]
    InvalidMove(#[from] Rejection),

    #[error("game over: {0}")]
    GameOver(#[from] Termination),
}

impl GameError {
    /// The message a player should see for this error, if any.
    ///
    /// Blank input and moves after the game ended leave the message alone.
    #[must_use]
    pub fn message(&self) -> Option<Message> {
        match self {
            GameError::DictionaryLoad(_) | GameError::NotReady => Some(Message::DictionaryUnavailable),
            GameError::NoStartWordFound => Some(Message::NoStartWord),
            GameError::BlankInput | GameError::GameEnded => None,
            GameError::InvalidMove(rejection) => Some(rejection.message()),
            GameError::GameOver(termination) => Some(termination.message()),
        }
    }

    /// Check if a reset is the only way to continue.
    #[must_use]
    pub fn requires_reset(&self) -> bool {
        matches!(
            self,
            GameError::DictionaryLoad(_)
                | GameError::NotReady
                | GameError::NoStartWordFound
                | GameError::GameEnded
                | GameError::GameOver(_)
        )
    }
}
