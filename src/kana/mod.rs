//! Kana normalization: canonical forms and word sounds.
//!
//! Shiritori chains on *sounds*, not on glyphs. Everything that compares
//! words goes through this module:
//!
//! - `canonicalize`: fold hiragana into katakana so both scripts compare equal
//! - `first_sound` / `last_sound`: the sound a word starts or ends with,
//!   after resolving small kana and long-vowel marks
//!
//! ```
//! use shiritori::kana::{canonicalize, last_sound};
//!
//! assert_eq!(canonicalize("りんご"), "リンゴ");
//! assert_eq!(last_sound("コーヒー"), Some('ヒ'));
//! assert_eq!(last_sound("きしゃ"), Some('ヤ'));
//! ```

pub mod normalize;
pub mod sound;

pub use normalize::{canonicalize, is_hiragana, is_kana_reading, LONG_VOWEL_MARK};
pub use sound::{first_sound, full_size, last_sound, TERMINAL_SOUND};
