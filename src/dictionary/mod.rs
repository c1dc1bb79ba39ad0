//! Word dictionary: an immutable membership oracle over canonical forms.
//!
//! A `Dictionary` is built once from its source and never modified. Hosts
//! provide the words through a `DictionarySource`:
//!
//! - `JsonSource`: a JSON array of `{ "word": ... }` records
//! - `ReadingsSource`: raw readings, cleaned with `clean_reading`
//! - `StaticSource`: an in-memory word list

mod reading;
mod source;
mod words;

pub use reading::clean_reading;
pub use source::{DictionarySource, JsonSource, ReadingsSource, StaticSource};
pub use words::{Dictionary, DictionaryEntry};
