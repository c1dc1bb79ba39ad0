//! Move validation.
//!
//! Rules are checked in a fixed order and the first one that matches
//! decides the verdict:
//!
//! 1. blank input is ignored
//! 2. unknown words are rejected
//! 3. repeated words end the game
//! 4. words ending in `ン` end the game
//! 5. words not starting with the previous word's last sound are rejected
//! 6. words shorter than the minimum length are rejected
//! 7. anything else is accepted
//!
//! Game-ending words are checked before the chain and length rules: a
//! repeated word or one ending in `ン` loses even if it would also have
//! been rejected.

use thiserror::Error;

use crate::core::config::DEFAULT_MIN_WORD_LENGTH;
use crate::core::{GameConfig, GameState, Message, Word};
use crate::dictionary::Dictionary;

/// Why a move was refused. The game state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not in dictionary")]
    NotInDictionary,

    #[error("must start with sound {expected}")]
    WrongStart { expected: char },

    /// Shorter than `min_length` characters. Reported with the
    /// single-character text whatever the configured minimum.
    #[error("single-character words not allowed")]
    TooShort { min_length: usize },
}

impl Rejection {
    /// The player-facing message.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Rejection::NotInDictionary => Message::NotInDictionary,
            Rejection::WrongStart { expected } => Message::MustStartWith { sound: *expected },
            Rejection::TooShort { .. } => Message::SingleCharacter,
        }
    }
}

/// Why a move ended the game. The word is still recorded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Termination {
    #[error("word already used")]
    AlreadyUsed { word: String },

    #[error("ends in terminal sound ん/ン")]
    TerminalSound { word: String },
}

impl Termination {
    /// The player-facing message.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Termination::AlreadyUsed { word } => Message::AlreadyUsed { word: word.clone() },
            Termination::TerminalSound { word } => Message::TerminalSound { word: word.clone() },
        }
    }
}

/// Outcome of evaluating one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to do: blank input, or the game cannot take moves.
    Ignored,
    /// The word continues the chain.
    Accepted(Word),
    /// The word was refused.
    Rejected(Rejection),
    /// The word was played and ended the game.
    Terminated(Termination, Word),
}

impl Verdict {
    /// Check if the move was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// Check if the move ended the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Verdict::Terminated(..))
    }

    /// The word that gets recorded, if any.
    #[must_use]
    pub fn word(&self) -> Option<&Word> {
        match self {
            Verdict::Accepted(word) | Verdict::Terminated(_, word) => Some(word),
            Verdict::Ignored | Verdict::Rejected(_) => None,
        }
    }

    /// The message this verdict sets, if any.
    #[must_use]
    pub fn message(&self) -> Option<Message> {
        match self {
            Verdict::Ignored => None,
            Verdict::Accepted(_) => Some(Message::Accepted),
            Verdict::Rejected(rejection) => Some(rejection.message()),
            Verdict::Terminated(termination, _) => Some(termination.message()),
        }
    }
}

/// Applies the ordered move rules.
#[derive(Clone, Copy, Debug)]
pub struct TurnValidator {
    min_word_length: usize,
}

impl Default for TurnValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORD_LENGTH)
    }
}

impl TurnValidator {
    /// Create a validator with the given minimum word length.
    #[must_use]
    pub fn new(min_word_length: usize) -> Self {
        Self { min_word_length }
    }

    /// Create a validator from a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.min_word_length)
    }

    /// Minimum word length in characters.
    #[must_use]
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Decide what playing `input` in `state` does.
    ///
    /// Does not look at `state.status()`; refusing moves after the game
    /// ended is the controller's job.
    #[must_use]
    pub fn evaluate(&self, state: &GameState, dictionary: &Dictionary, input: &str) -> Verdict {
        let word = Word::new(input);

        if word.is_empty() {
            return Verdict::Ignored;
        }

        if !dictionary.has(word.canonical()) {
            return Verdict::Rejected(Rejection::NotInDictionary);
        }

        if state.has_used(word.canonical()) {
            let termination = Termination::AlreadyUsed {
                word: word.raw().to_string(),
            };
            return Verdict::Terminated(termination, word);
        }

        if word.ends_in_terminal_sound() {
            let termination = Termination::TerminalSound {
                word: word.raw().to_string(),
            };
            return Verdict::Terminated(termination, word);
        }

        if let Some(expected) = state.expected_sound() {
            if word.first_sound() != Some(expected) {
                return Verdict::Rejected(Rejection::WrongStart { expected });
            }
        }

        if word.char_len() < self.min_word_length {
            return Verdict::Rejected(Rejection::TooShort {
                min_length: self.min_word_length,
            });
        }

        Verdict::Accepted(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "りんご", "ゴリラ", "らっぱ", "ぱんだ", "さかな", "ほん", "ご", "ら", "きしゃ", "やま",
        ])
    }

    fn after(words: &[&str]) -> GameState {
        GameState::from_played(words.iter().copied(), 10)
    }

    #[test]
    fn test_blank_ignored() {
        let validator = TurnValidator::default();
        let state = after(&["りんご"]);

        assert_eq!(validator.evaluate(&state, &dictionary(), ""), Verdict::Ignored);
        assert_eq!(validator.evaluate(&state, &dictionary(), "  \t"), Verdict::Ignored);
    }

    #[test]
    fn test_accepts_chain() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), "ゴリラ");

        assert_eq!(verdict, Verdict::Accepted(Word::new("ゴリラ")));
        assert_eq!(verdict.message(), Some(Message::Accepted));
    }

    #[test]
    fn test_accepts_across_scripts() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), "ごりら");
        assert!(verdict.is_accepted());
    }

    #[test]
    fn test_input_is_trimmed() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), " ゴリラ ");
        assert_eq!(verdict.word().map(Word::raw), Some("ゴリラ"));
    }

    #[test]
    fn test_not_in_dictionary() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), "ごま");
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotInDictionary));
    }

    #[test]
    fn test_wrong_start() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), "さかな");

        assert_eq!(verdict, Verdict::Rejected(Rejection::WrongStart { expected: 'ゴ' }));
        assert_eq!(
            verdict.message().map(|m| m.to_string()).as_deref(),
            Some("must start with sound ゴ")
        );
    }

    #[test]
    fn test_chain_through_small_kana() {
        let verdict = TurnValidator::default().evaluate(&after(&["きしゃ"]), &dictionary(), "やま");
        assert!(verdict.is_accepted());
    }

    #[test]
    fn test_already_used_ends_game() {
        let state = after(&["りんご", "ゴリラ"]);
        let verdict = TurnValidator::default().evaluate(&state, &dictionary(), "りんご");

        assert!(verdict.is_terminal());
        assert_eq!(
            verdict,
            Verdict::Terminated(
                Termination::AlreadyUsed { word: "りんご".into() },
                Word::new("りんご")
            )
        );
    }

    #[test]
    fn test_used_check_is_script_insensitive() {
        let state = after(&["りんご", "ゴリラ"]);
        let verdict = TurnValidator::default().evaluate(&state, &dictionary(), "リンゴ");

        assert!(matches!(verdict, Verdict::Terminated(Termination::AlreadyUsed { .. }, _)));
    }

    #[test]
    fn test_terminal_sound_ends_game() {
        let verdict = TurnValidator::default().evaluate(&after(&["らっぱ"]), &dictionary(), "ぱんだ");
        assert!(verdict.is_accepted());

        let state = after(&["ゴリラ", "らっぱ", "ぱんだ"]);
        let verdict = TurnValidator::default().evaluate(&state, &dictionary(), "ほん");
        assert!(matches!(verdict, Verdict::Terminated(Termination::TerminalSound { .. }, _)));
    }

    #[test]
    fn test_terminal_sound_beats_chain_mismatch() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), "ほん");
        assert!(matches!(verdict, Verdict::Terminated(Termination::TerminalSound { .. }, _)));
    }

    #[test]
    fn test_used_beats_terminal_sound() {
        let state = after(&["ほん"]);
        let verdict = TurnValidator::default().evaluate(&state, &dictionary(), "ほん");
        assert!(matches!(verdict, Verdict::Terminated(Termination::AlreadyUsed { .. }, _)));
    }

    #[test]
    fn test_soundless_word_cannot_break_chain() {
        let dictionary = Dictionary::from_words(["ーー", "さかな", "ほん"]);
        let validator = TurnValidator::default();

        let verdict = validator.evaluate(&after(&["りんご"]), &dictionary, "ーー");
        assert_eq!(verdict, Verdict::Rejected(Rejection::NotInDictionary));

        let verdict = validator.evaluate(&after(&["りんご"]), &dictionary, "さかな");
        assert_eq!(verdict, Verdict::Rejected(Rejection::WrongStart { expected: 'ゴ' }));
    }

    #[test]
    fn test_too_short() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), "ご");

        assert_eq!(verdict, Verdict::Rejected(Rejection::TooShort { min_length: 2 }));
        assert_eq!(verdict.message(), Some(Message::SingleCharacter));
    }

    #[test]
    fn test_rejection_text_matches_message() {
        let rejections = [
            Rejection::NotInDictionary,
            Rejection::WrongStart { expected: 'ゴ' },
            Rejection::TooShort { min_length: 2 },
        ];

        for rejection in rejections {
            assert_eq!(rejection.to_string(), rejection.message().to_string());
        }
    }

    #[test]
    fn test_chain_mismatch_beats_too_short() {
        let verdict = TurnValidator::default().evaluate(&after(&["りんご"]), &dictionary(), "ら");
        assert_eq!(verdict, Verdict::Rejected(Rejection::WrongStart { expected: 'ゴ' }));
    }

    #[test]
    fn test_empty_history_skips_chain() {
        let state = GameState::new(10);
        let verdict = TurnValidator::default().evaluate(&state, &dictionary(), "さかな");
        assert!(verdict.is_accepted());
    }

    #[test]
    fn test_custom_min_length() {
        let validator = TurnValidator::from_config(&GameConfig::new().with_min_word_length(4));
        let verdict = validator.evaluate(&after(&["りんご"]), &dictionary(), "ゴリラ");

        assert_eq!(verdict, Verdict::Rejected(Rejection::TooShort { min_length: 4 }));
    }
}
