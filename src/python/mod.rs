//! Python bindings for the shiritori engine.
//!
//! # Quick Start
//!
//! ```python
//! import shiritori
//!
//! game = shiritori.Shiritori(words=["りんご", "ごりら", "らっぱ"], seed=42)
//!
//! game.submit("ごりら")
//! print(game.history, game.message)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// shiritori: a Japanese word-chain game engine.
#[pymodule]
fn shiritori(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyShiritori>()?;

    Ok(())
}
