//! The dictionary word set.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Word};
use crate::kana;

/// One record of a dictionary source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// The word in hiragana or katakana.
    pub word: String,
}

impl DictionaryEntry {
    /// Create an entry.
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Immutable set of playable words.
///
/// Membership is decided on canonical forms, so `りんご` and `リンゴ` are
/// the same entry. The first raw spelling seen is the one drawn by
/// `sample`.
///
/// ## Example
///
/// ```
/// use shiritori::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["りんご", "ゴリラ"]);
///
/// assert!(dictionary.contains("リンゴ"));
/// assert!(dictionary.has("ゴリラ"));
/// assert!(!dictionary.contains("さかな"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    /// Canonical forms, for membership.
    canonical: FxHashSet<String>,
    /// Raw spellings, for sampling. One per canonical form.
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from source entries.
    ///
    /// Blank entries are skipped. Entries whose canonical form is already
    /// present are ignored.
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        Self::from_words(entries.into_iter().map(|entry| entry.word))
    }

    /// Build a dictionary from raw words.
    ///
    /// Words with no sound to chain from (only `ー`) are skipped.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();

        for word in words {
            let raw = word.as_ref().trim();
            if kana::last_sound(raw).is_none() {
                continue;
            }
            if dictionary.canonical.insert(kana::canonicalize(raw)) {
                dictionary.words.push(raw.to_string());
            }
        }

        dictionary
    }

    /// Check if a canonical form is in the dictionary.
    #[must_use]
    pub fn has(&self, canonical: &str) -> bool {
        self.canonical.contains(canonical)
    }

    /// Check if a word in either script is in the dictionary.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.has(&kana::canonicalize(raw.trim()))
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over raw spellings in load order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Draw a raw word uniformly at random.
    ///
    /// Returns `None` if the dictionary is empty.
    pub fn sample(&self, rng: &mut GameRng) -> Option<&str> {
        rng.choose(&self.words).map(String::as_str)
    }

    /// Words that may open a game: neither first nor last sound is `ン`.
    #[must_use]
    pub fn start_candidates(&self) -> Vec<&str> {
        self.iter()
            .filter(|raw| Word::new(raw).is_legal_opener())
            .collect()
    }
}

impl FromIterator<DictionaryEntry> for Dictionary {
    fn from_iter<T: IntoIterator<Item = DictionaryEntry>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_script_insensitive() {
        let dictionary = Dictionary::from_words(["りんご", "ゴリラ"]);

        assert!(dictionary.has("リンゴ"));
        assert!(dictionary.has("ゴリラ"));
        assert!(!dictionary.has("りんご")); // `has` takes canonical forms
        assert!(dictionary.contains("りんご"));
        assert!(dictionary.contains("ごりら"));
        assert!(!dictionary.contains("さかな"));
    }

    #[test]
    fn test_duplicates_keep_first_spelling() {
        let dictionary = Dictionary::from_words(["りんご", "リンゴ", "りんご"]);

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["りんご"]);
    }

    #[test]
    fn test_blank_entries_skipped() {
        let dictionary = Dictionary::from_words(["", "  ", "ねこ"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_soundless_entries_skipped() {
        let dictionary = Dictionary::from_words(["ー", "ーー", "らー"]);

        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["らー"]);
        assert!(!dictionary.contains("ーー"));
    }

    #[test]
    fn test_from_entries() {
        let dictionary: Dictionary = vec![DictionaryEntry::new("ねこ"), DictionaryEntry::new("こま")]
            .into_iter()
            .collect();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("こま"));
    }

    #[test]
    fn test_sample() {
        let dictionary = Dictionary::from_words(["ねこ", "こま", "まり"]);
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let word = dictionary.sample(&mut rng).unwrap();
            assert!(dictionary.contains(word));
        }

        assert!(Dictionary::default().sample(&mut rng).is_none());
    }

    #[test]
    fn test_sample_is_deterministic() {
        let dictionary = Dictionary::from_words(["ねこ", "こま", "まり", "りす", "すいか"]);
        let mut rng1 = GameRng::new(3);
        let mut rng2 = GameRng::new(3);

        for _ in 0..10 {
            assert_eq!(dictionary.sample(&mut rng1), dictionary.sample(&mut rng2));
        }
    }

    #[test]
    fn test_start_candidates() {
        let dictionary = Dictionary::from_words(["ほん", "りんご", "んじゃめな", "らーめん", "ごりら"]);

        assert_eq!(dictionary.start_candidates(), vec!["りんご", "ごりら"]);
    }
}
