//! Error types for quizbank.
//!
//! This module defines the centralized error type [`QuizbankError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for quizbank operations.
///
/// This enum consolidates all error conditions that can occur during a
/// session, from the one-shot dataset load to CSV export. Variants wrapping
/// underlying errors from external crates use `#[from]` for automatic
/// conversion with `?`.
#[derive(Debug, Error)]
pub enum QuizbankError {
    /// The dataset could not be loaded or parsed.
    ///
    /// Fatal for the session: the shell surfaces the message and exits.
    /// The string describes what went wrong (missing file, malformed JSON).
    #[error("Dataset error: {0}")]
    Load(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (reading the
    /// dataset, writing an export file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization of the current view failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a custom theme file cannot be read or parsed. The shell
    /// falls back to the default theme.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for quizbank operations.
pub type Result<T> = std::result::Result<T, QuizbankError>;
