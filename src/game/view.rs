//! Owned snapshot of what a player sees.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, GameStatus};

/// Everything a presentation layer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Raw words, most recent first.
    pub history: Vec<String>,
    pub status: GameStatus,
    /// English message text.
    pub message: Option<String>,
    /// Japanese message text.
    pub message_ja: Option<String>,
    /// The sound the next word must start with.
    pub expected_sound: Option<char>,
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        Self {
            history: state.history_raw().map(str::to_string).collect(),
            status: state.status(),
            message: state.message().map(ToString::to_string),
            message_ja: state.message().map(|message| message.japanese()),
            expected_sound: state.expected_sound(),
        }
    }
}
