//! Defines application-specific error types.
//!
//! This module provides the [`Error`] enum used throughout `svgcombine`,
//! offering more context than generic I/O errors, plus the crate-wide
//! `Result` alias.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `svgcombine`.
#[derive(Error, Debug)]
pub enum Error {
    /// A record's content was streamed rather than fully materialized.
    ///
    /// The grouper only operates on buffered content; the offending record
    /// is dropped and the run continues. The message is stable and relied
    /// upon by callers.
    #[error("Streaming not supported")]
    UnsupportedMode,

    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The built-in combiner failed to parse or rebuild a variant's markup.
    #[error("Failed to combine markup for icon '{name}': {source}")]
    Combine {
        /// The derived icon name whose variants were being merged.
        name: String,
        /// The underlying XML error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No SVG files were found matching the given criteria.
    #[error("No SVG icons found matching the specified criteria.")]
    NoIconsFound,
}

/// Helper to create an [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
