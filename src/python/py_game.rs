//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::dictionary::{JsonSource, StaticSource};
use crate::game::GameController;

/// Python wrapper for GameController.
///
/// Starts a game on construction.
#[pyclass(name = "Shiritori")]
pub struct PyShiritori {
    controller: GameController,
}

#[pymethods]
impl PyShiritori {
    /// Create and start a game.
    ///
    /// # Arguments
    /// - words: In-memory word list (used when `path` is not given)
    /// - path: JSON file of `{"word": ...}` records, reloaded on reset
    /// - seed: RNG seed for reproducible opening words
    /// - history_limit: Number of words kept in `history`
    #[new]
    #[pyo3(signature = (words = None, path = None, seed = None, history_limit = 10))]
    fn new(
        words: Option<Vec<String>>,
        path: Option<String>,
        seed: Option<u64>,
        history_limit: usize,
    ) -> PyResult<Self> {
        if history_limit == 0 {
            return Err(PyValueError::new_err("history_limit must be at least 1"));
        }

        let mut config = GameConfig::new().with_history_limit(history_limit);
        config.seed = seed;

        let mut controller = match path {
            Some(path) => GameController::new(JsonSource::from_path(path), config),
            None => GameController::new(StaticSource::new(words.unwrap_or_default()), config),
        };
        controller.start();

        Ok(Self { controller })
    }

    /// Play a word. Returns True if it was accepted.
    fn submit(&mut self, word: &str) -> bool {
        self.controller.submit(word).is_accepted()
    }

    /// Start a new game.
    fn reset(&mut self) {
        self.controller.reset();
    }

    /// Played words, most recent first.
    #[getter]
    fn history(&self) -> Vec<String> {
        self.controller.history().map(str::to_string).collect()
    }

    /// "active" or "ended".
    #[getter]
    fn status(&self) -> String {
        self.controller.status().to_string()
    }

    /// Latest message in English.
    #[getter]
    fn message(&self) -> Option<String> {
        self.controller.message().map(ToString::to_string)
    }

    /// Latest message in Japanese.
    #[getter]
    fn message_ja(&self) -> Option<String> {
        self.controller.message().map(|message| message.japanese())
    }

    /// The sound the next word must start with.
    #[getter]
    fn expected_sound(&self) -> Option<char> {
        self.controller.expected_sound()
    }

    /// Whether the dictionary is loaded.
    #[getter]
    fn ready(&self) -> bool {
        self.controller.is_ready()
    }

    fn __repr__(&self) -> String {
        format!(
            "Shiritori(status={}, history={})",
            self.controller.status(),
            self.controller.state().history().len()
        )
    }
}
