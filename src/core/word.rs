//! Words as played: raw text plus derived canonical data.

use serde::{Deserialize, Serialize};

use crate::kana;

/// A word as entered by a player or drawn from the dictionary.
///
/// The raw text is what gets displayed; the canonical form is what gets
/// compared. Both are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    raw: String,
    canonical: String,
}

impl Word {
    /// Create a word from raw text. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref().trim().to_string();
        let canonical = kana::canonicalize(&raw);
        Self { raw, canonical }
    }

    /// The text as entered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The katakana-normalized form used for lookup and repeat detection.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Number of characters in the raw text.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Check if the word has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The sound this word starts with.
    #[must_use]
    pub fn first_sound(&self) -> Option<char> {
        kana::first_sound(&self.canonical)
    }

    /// The sound this word ends with.
    #[must_use]
    pub fn last_sound(&self) -> Option<char> {
        kana::last_sound(&self.canonical)
    }

    /// Check if this word ends with `ン`.
    #[must_use]
    pub fn ends_in_terminal_sound(&self) -> bool {
        self.last_sound() == Some(kana::TERMINAL_SOUND)
    }

    /// Check if this word has a sound to chain from (it is not only `ー`).
    #[must_use]
    pub fn has_sound(&self) -> bool {
        self.last_sound().is_some()
    }

    /// Check if this word can open a game: it has a last sound, and
    /// neither starts nor ends with `ン`.
    #[must_use]
    pub fn is_legal_opener(&self) -> bool {
        self.has_sound()
            && self.first_sound() != Some(kana::TERMINAL_SOUND)
            && !self.ends_in_terminal_sound()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Word {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
