//! # stardict-av
//!
//! A decoder and definition-mining engine for StarDict Anh-Việt dictionary
//! payloads (`.dict` / `.dict.dz` files).
//!
//! The format carries no schema beyond an optional word-count hint in a
//! companion `.ifo` file: records are packed back to back as a NUL-terminated
//! word followed by a length-prefixed definition blob. This crate walks those
//! records, strips embedded markup, and heuristically segments the Vietnamese
//! definition text into part-of-speech-tagged senses and bilingual example
//! pairs using layered marker patterns. Decoded rows are persisted as
//! `(word, definition, source)` triples in an indexed SQLite store, and the
//! query path re-runs the segmentation pipeline lazily per lookup.
pub mod stardict;

// Re-export the main types for convenience
pub use stardict::{
    error::{Result, StarDictError},
    models::{Definition, DictionarySource, Example, Pos, WordData},
    ImportOptions, StarDict,
};
