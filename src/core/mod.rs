//! Core engine types: words, state, messages, RNG, configuration.
//!
//! These are the building blocks shared by the dictionary, the rules,
//! and the controller.

pub mod config;
pub mod message;
pub mod rng;
pub mod state;
pub mod word;

pub use config::{GameConfig, StartStrategy};
pub use message::Message;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, GameStatus};
pub use word::Word;
