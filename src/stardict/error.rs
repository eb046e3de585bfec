//! Custom error types for the stardict-av crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum StarDictError {
    /// An error originating from I/O operations (file read, gzip inflate).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error originating from the underlying SQLite store.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The dictionary payload to import does not exist on disk.
    #[error("Dictionary file not found: {0}")]
    MissingFile(String),
}

/// A convenience `Result` type alias using the crate's `StarDictError` type.
pub type Result<T> = std::result::Result<T, StarDictError>;
