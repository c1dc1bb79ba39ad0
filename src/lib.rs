//! # shiritori
//!
//! A rules engine for shiritori, the Japanese word-chain game: each word
//! must start with the sound the previous word ended with.
//!
//! ## Rules
//!
//! 1. Words must be in the dictionary.
//! 2. Playing a word twice ends the game.
//! 3. Playing a word that ends in `ん`/`ン` ends the game.
//! 4. Each word must start with the last sound of the previous word.
//! 5. Single-character words are not allowed.
//!
//! Hiragana and katakana spellings are the same word. Sounds are compared
//! after resolving small kana (`ゃ` counts as `や`) and long-vowel marks
//! (`コーヒー` ends in `ヒ`).
//!
//! ## Architecture
//!
//! - **Explicit ownership**: `GameController` owns the only mutable
//!   `GameState`; normalization, dictionary, and rules are pure.
//!
//! - **Persistent Data Structures**: O(1) state snapshots via `im-rs`.
//!
//! - **Deterministic**: Opening words come from a seedable ChaCha RNG.
//!
//! ## Modules
//!
//! - `kana`: Canonical forms and word sounds
//! - `core`: Words, state, messages, RNG, configuration
//! - `dictionary`: Word set and its sources
//! - `rules`: Opening word selection and move validation
//! - `game`: The controller a presentation layer talks to
//! - `error`: Error types

pub mod core;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod kana;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, GameState, GameStatus, Message, StartStrategy, Word,
};

pub use crate::dictionary::{
    Dictionary, DictionaryEntry, DictionarySource, JsonSource, ReadingsSource, StaticSource,
};

pub use crate::error::{DictionaryLoadError, GameError};

pub use crate::game::{GameController, GameView};

pub use crate::rules::{Rejection, StartWordSelector, Termination, TurnValidator, Verdict};
