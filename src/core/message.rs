//! Outcome messages shown to the player.
//!
//! The engine picks the message; rendering is left to the host. `Display`
//! gives the English text, `japanese()` the Japanese one.

use serde::{Deserialize, Serialize};

/// Latest outcome of a game operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// The word is not in the dictionary.
    NotInDictionary,
    /// The word was already played; the game is over.
    AlreadyUsed { word: String },
    /// The word ends with `ン`; the game is over.
    TerminalSound { word: String },
    /// The word does not start with the expected sound.
    MustStartWith { sound: char },
    /// The word is shorter than the minimum length.
    SingleCharacter,
    /// The word was accepted.
    Accepted,
    /// A new game was started by reset.
    Restarted,
    /// No legal opening word could be drawn.
    NoStartWord,
    /// The dictionary could not be loaded.
    DictionaryUnavailable,
}

impl Message {
    /// Check if this message reports the end of the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Message::AlreadyUsed { .. } | Message::TerminalSound { .. })
    }

    /// Japanese rendering of the message.
    #[must_use]
    pub fn japanese(&self) -> String {
        match self {
            Message::NotInDictionary => "辞書にない単語です".to_string(),
            Message::AlreadyUsed { .. } => "その単語はもう使いました、ゲームを終了します！".to_string(),
            Message::TerminalSound { word } => format!("{word}で終了！「ん」が付きました"),
            Message::MustStartWith { sound } => format!("「{sound}」から始まる言葉にしてね"),
            Message::SingleCharacter => "1文字の単語は使えません".to_string(),
            Message::Accepted => "OK！".to_string(),
            Message::Restarted => "ゲームをリスタートしました！".to_string(),
            Message::NoStartWord => "開始単語が見つかりませんでした".to_string(),
            Message::DictionaryUnavailable => "辞書を読み込めませんでした".to_string(),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::NotInDictionary => f.write_str("not in dictionary"),
            Message::AlreadyUsed { .. } => f.write_str("word already used — game over"),
            Message::TerminalSound { .. } => f.write_str("ends in terminal sound ん/ン — game over"),
            Message::MustStartWith { sound } => write!(f, "must start with sound {sound}"),
            Message::SingleCharacter => f.write_str("single-character words not allowed"),
            Message::Accepted => f.write_str("accepted"),
            Message::Restarted => f.write_str("restarted"),
            Message::NoStartWord => f.write_str("no valid starting word found"),
            Message::DictionaryUnavailable => f.write_str("dictionary unavailable"),
        }
    }
}
