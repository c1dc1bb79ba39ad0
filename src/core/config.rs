//! Game configuration.
//!
//! Hosts configure the engine at startup via `GameConfig`. Every field has
//! a default matching standard shiritori play, so `GameConfig::default()`
//! is a complete configuration. Configs deserialize from JSON so they can
//! ship next to the word list.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Default number of history entries kept for display.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default minimum word length in characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Default number of draws before start-word selection gives up.
pub const DEFAULT_START_ATTEMPTS: usize = 50;

/// How the opening word is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StartStrategy {
    /// Draw random words until one is a legal opener, at most `attempts` times.
    ///
    /// Bounded work per start; may fail on dictionaries where legal
    /// openers are rare.
    BoundedRetry { attempts: usize },
    /// Draw uniformly from the legal openers only.
    ///
    /// Scans the dictionary once per start; always succeeds if any legal
    /// opener exists.
    Prefiltered,
}

impl Default for StartStrategy {
    fn default() -> Self {
        StartStrategy::BoundedRetry {
            attempts: DEFAULT_START_ATTEMPTS,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of most-recent words kept in the displayed history.
    ///
    /// Does not limit repeat detection. Must be at least 1.
    #[serde(deserialize_with = "deserialize_history_limit")]
    pub history_limit: usize,

    /// Words shorter than this (in characters) are rejected.
    pub min_word_length: usize,

    /// Opening word selection.
    pub start_strategy: StartStrategy,

    /// RNG seed. `None` seeds from entropy once per controller.
    pub seed: Option<u64>,
}

fn deserialize_history_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let limit = usize::deserialize(deserializer)?;
    if limit == 0 {
        return Err(D::Error::custom("history_limit must be at least 1"));
    }
    Ok(limit)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            start_strategy: StartStrategy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    ///
    /// A `history_limit` of 0 is a parse error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the display history limit.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "History limit must be at least 1");
        self.history_limit = limit;
        self
    }

    /// Set the minimum word length.
    #[must_use]
    pub fn with_min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = length;
        self
    }

    /// Set the start-word strategy.
    #[must_use]
    pub fn with_start_strategy(mut self, strategy: StartStrategy) -> Self {
        self.start_strategy = strategy;
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
