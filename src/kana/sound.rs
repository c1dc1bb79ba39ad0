//! First and last sounds of a word.

use super::normalize::{canonicalize, LONG_VOWEL_MARK};

/// The terminal sound `ン`. A word ending in it ends the game.
pub const TERMINAL_SOUND: char = 'ン';

/// Map a small katakana to its full-size base.
///
/// Small kana modify the preceding consonant, so for chaining they count
/// as their full-size sound. Other characters are returned unchanged.
#[must_use]
pub fn full_size(c: char) -> char {
    match c {
        'ァ' => 'ア',
        'ィ' => 'イ',
        'ゥ' => 'ウ',
        'ェ' => 'エ',
        'ォ' => 'オ',
        'ャ' => 'ヤ',
        'ュ' => 'ユ',
        'ョ' => 'ヨ',
        'ッ' => 'ツ',
        'ヮ' => 'ワ',
        'ヵ' => 'カ',
        'ヶ' => 'ケ',
        other => other,
    }
}

/// The sound a word ends with.
///
/// Trailing long-vowel marks are skipped, then small kana are resolved.
/// Returns `None` for an empty word or one made only of `ー`.
#[must_use]
pub fn last_sound(word: &str) -> Option<char> {
    canonicalize(word)
        .chars()
        .rev()
        .find(|&c| c != LONG_VOWEL_MARK)
        .map(full_size)
}

/// The sound a word starts with, in canonical form.
#[must_use]
pub fn first_sound(word: &str) -> Option<char> {
    canonicalize(word).chars().next().map(full_size)
}
