//! Script folding from hiragana to katakana.

/// The long-vowel mark `ー` (shared by both scripts).
pub const LONG_VOWEL_MARK: char = 'ー';

/// First hiragana code point that has a katakana twin (`ぁ`).
const HIRAGANA_START: u32 = 0x3041;
/// Last hiragana code point that has a katakana twin (`ゖ`).
const HIRAGANA_END: u32 = 0x3096;
/// Distance between a hiragana and its katakana twin.
const KATAKANA_OFFSET: u32 = 0x60;

/// Check if a character is hiragana with a katakana equivalent.
#[must_use]
pub fn is_hiragana(c: char) -> bool {
    (HIRAGANA_START..=HIRAGANA_END).contains(&(c as u32))
}

/// Check if a character is in the reading alphabet: `ぁ`..=`ん` or `ァ`..=`ン`.
///
/// `ゔ`, `ゕ`, `ゖ`, `ヴ`, `ヵ`, `ヶ` fall outside it.
fn is_reading_kana(c: char) -> bool {
    ('\u{3041}'..='\u{3093}').contains(&c) || ('\u{30A1}'..='\u{30F3}').contains(&c)
}

fn to_katakana(c: char) -> char {
    if is_hiragana(c) {
        // The shifted range U+30A1..=U+30F6 is fully assigned.
        char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Convert a word to its canonical (katakana) form.
///
/// Hiragana are shifted to katakana; every other character is kept as is.
#[must_use]
pub fn canonicalize(word: &str) -> String {
    word.chars().map(to_katakana).collect()
}

/// Check if text is a usable dictionary reading: non-empty and made only
/// of basic hiragana, basic katakana, and the long-vowel mark.
#[must_use]
pub fn is_kana_reading(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| is_reading_kana(c) || c == LONG_VOWEL_MARK)
}
