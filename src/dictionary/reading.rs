//! Cleanup of raw dictionary readings.
//!
//! Readings exported from word lists carry annotations: wave dashes for
//! affixes (`～さん`) and parenthesized notes (`かく(する)`). Those are
//! stripped, and anything that is not pure kana afterwards is dropped.

use std::sync::OnceLock;

use regex::Regex;

use crate::kana;

fn annotations() -> &'static Regex {
    static ANNOTATIONS: OnceLock<Regex> = OnceLock::new();
    ANNOTATIONS.get_or_init(|| {
        Regex::new(r"[～〜]|\(.*?\)|（.*?）").expect("annotation pattern is valid")
    })
}

/// Clean a raw reading into a playable word.
///
/// Returns `None` when nothing usable remains.
///
/// ```
/// use shiritori::dictionary::clean_reading;
///
/// assert_eq!(clean_reading("～さん").as_deref(), Some("さん"));
/// assert_eq!(clean_reading("かく(する)").as_deref(), Some("かく"));
/// assert_eq!(clean_reading("猫"), None);
/// ```
#[must_use]
pub fn clean_reading(raw: &str) -> Option<String> {
    let cleaned = annotations().replace_all(raw, "");
    let cleaned = cleaned.trim();

    kana::is_kana_reading(cleaned).then(|| cleaned.to_string())
}
