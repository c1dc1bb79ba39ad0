//! Dictionary sources.
//!
//! A source is asked for a fresh `Dictionary` on every game start, so a
//! source backed by a file picks up edits on the next reset.

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use super::reading::clean_reading;
use super::words::{Dictionary, DictionaryEntry};
use crate::error::DictionaryLoadError;

/// Something a dictionary can be loaded from.
///
/// Implementations must return `DictionaryLoadError::Empty` rather than an
/// empty dictionary.
pub trait DictionarySource: Send {
    /// Load the dictionary.
    fn load(&self) -> Result<Dictionary, DictionaryLoadError>;
}

fn non_empty(dictionary: Dictionary) -> Result<Dictionary, DictionaryLoadError> {
    if dictionary.is_empty() {
        return Err(DictionaryLoadError::Empty);
    }
    Ok(dictionary)
}

#[derive(Clone, Debug)]
enum Input {
    Text(String),
    Path(PathBuf),
}

impl Input {
    fn read(&self) -> Result<String, DictionaryLoadError> {
        match self {
            Input::Text(text) => Ok(text.clone()),
            Input::Path(path) => Ok(std::fs::read_to_string(path)?),
        }
    }
}

/// JSON array of `{ "word": ... }` records.
///
/// ```
/// use shiritori::dictionary::{DictionarySource, JsonSource};
///
/// let source = JsonSource::from_text(r#"[{ "word": "りんご" }, { "word": "ごりら" }]"#);
/// let dictionary = source.load().unwrap();
///
/// assert_eq!(dictionary.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct JsonSource {
    input: Input,
}

impl JsonSource {
    /// Source from JSON text held in memory.
    pub fn from_text(json: impl Into<String>) -> Self {
        Self {
            input: Input::Text(json.into()),
        }
    }

    /// Source from a JSON file, read on every load.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::Path(path.into()),
        }
    }

    /// Parse a dictionary from a reader once.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Dictionary, DictionaryLoadError> {
        let entries: Vec<DictionaryEntry> = serde_json::from_reader(reader)?;
        non_empty(Dictionary::new(entries))
    }
}

impl DictionarySource for JsonSource {
    fn load(&self) -> Result<Dictionary, DictionaryLoadError> {
        let text = self.input.read()?;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(&text)?;
        let total = entries.len();
        let dictionary = non_empty(Dictionary::new(entries))?;

        debug!(entries = total, words = dictionary.len(), "Loaded JSON dictionary");
        Ok(dictionary)
    }
}

/// Raw readings, one per line or given directly.
///
/// Each reading goes through `clean_reading`; readings that do not clean
/// to pure kana are dropped.
#[derive(Clone, Debug)]
pub struct ReadingsSource {
    input: Input,
}

impl ReadingsSource {
    /// Source from readings held in memory.
    pub fn from_readings<I, S>(readings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = readings
            .into_iter()
            .map(|reading| reading.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            input: Input::Text(text),
        }
    }

    /// Source from a text file with one reading per line.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::Path(path.into()),
        }
    }
}

impl DictionarySource for ReadingsSource {
    fn load(&self) -> Result<Dictionary, DictionaryLoadError> {
        let text = self.input.read()?;
        let readings: Vec<String> = text.lines().filter_map(clean_reading).collect();
        let dictionary = non_empty(Dictionary::from_words(&readings))?;

        debug!(
            lines = text.lines().count(),
            words = dictionary.len(),
            "Loaded reading list"
        );
        Ok(dictionary)
    }
}

/// In-memory word list.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    words: Vec<String>,
}

impl StaticSource {
    /// Source from a list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl DictionarySource for StaticSource {
    fn load(&self) -> Result<Dictionary, DictionaryLoadError> {
        non_empty(Dictionary::from_words(&self.words))
    }
}

impl DictionarySource for Dictionary {
    fn load(&self) -> Result<Dictionary, DictionaryLoadError> {
        non_empty(self.clone())
    }
}
