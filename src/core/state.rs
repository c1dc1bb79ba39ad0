//! Game state: history, used words, status, and the latest message.
//!
//! `GameState` uses `im` persistent collections so a snapshot can be
//! cloned in O(1) and handed to a presentation layer while the
//! controller keeps playing.
//!
//! ## Invariants
//!
//! - `history` is most-recent-first and never longer than `history_limit`
//! - every canonical form in `history` is in `used`
//! - `used` is never trimmed by the history limit
//! - once `status` is `Ended` the state only changes by replacement

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::message::Message;
use super::word::Word;

/// Whether the game accepts moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    Active,
    /// A game-ending word was played. Only a reset continues.
    Ended,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Active => f.write_str("active"),
            GameStatus::Ended => f.write_str("ended"),
        }
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Played words, most recent first.
    history: Vector<Word>,

    /// Canonical forms of every word played this game.
    used: ImHashSet<String>,

    status: GameStatus,

    message: Option<Message>,

    history_limit: usize,
}

impl GameState {
    /// Create an empty, active state.
    #[must_use]
    pub fn new(history_limit: usize) -> Self {
        assert!(history_limit > 0, "History limit must be at least 1");

        Self {
            history: Vector::new(),
            used: ImHashSet::new(),
            status: GameStatus::Active,
            message: None,
            history_limit,
        }
    }

    /// Create an active state whose history is the single opening word.
    #[must_use]
    pub fn with_opening(start: Word, history_limit: usize) -> Self {
        let mut state = Self::new(history_limit);
        state.record(start);
        state
    }

    /// Create an active state from words in play order (oldest first).
    ///
    /// Every word is marked used, even ones beyond the history limit.
    #[must_use]
    pub fn from_played<I, W>(words: I, history_limit: usize) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        let mut state = Self::new(history_limit);
        for word in words {
            state.record(word.into());
        }
        state
    }

    // === Queries ===

    /// Played words, most recent first.
    #[must_use]
    pub fn history(&self) -> &Vector<Word> {
        &self.history
    }

    /// Raw text of the played words, most recent first.
    pub fn history_raw(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(Word::raw)
    }

    /// The most recently played word.
    #[must_use]
    pub fn latest(&self) -> Option<&Word> {
        self.history.front()
    }

    /// The sound the next word must start with, if any.
    #[must_use]
    pub fn expected_sound(&self) -> Option<char> {
        self.latest().and_then(Word::last_sound)
    }

    /// Canonical forms played so far.
    #[must_use]
    pub fn used(&self) -> &ImHashSet<String> {
        &self.used
    }

    /// Check if a canonical form has been played.
    #[must_use]
    pub fn has_used(&self, canonical: &str) -> bool {
        self.used.contains(canonical)
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Latest outcome message.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Display history limit.
    #[must_use]
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    // === Mutation (controller only) ===

    /// Record a played word: prepend to history and mark used.
    pub(crate) fn record(&mut self, word: Word) {
        self.used.insert(word.canonical().to_string());
        self.history.push_front(word);
        if self.history.len() > self.history_limit {
            self.history.truncate(self.history_limit);
        }
    }

    /// Mark the game as over.
    pub(crate) fn end(&mut self) {
        self.status = GameStatus::Ended;
    }

    /// Replace the latest message.
    pub(crate) fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }
}
