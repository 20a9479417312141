/*!
 * Error types for the lexireader library.
 *
 * Every error here is recoverable at the granularity of one file or one tap;
 * nothing in the text pipeline is fatal to the process. Types are defined
 * with the thiserror crate.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when turning raw bytes into text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No candidate encoding could interpret the buffer
    #[error("No supported text encoding could decode {byte_len} bytes")]
    Exhausted {
        /// Size of the rejected buffer
        byte_len: usize,
    },
}

/// Errors that can occur while importing a single file of a batch
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be read from disk
    #[error("Cannot read {path:?}: {source}")]
    FileAccess {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not decodable text
    #[error("Unreadable text in '{name}': {source}")]
    Decode {
        /// Display name of the source
        name: String,
        /// Underlying decode failure
        #[source]
        source: DecodeError,
    },

    /// The background worker for this file panicked or was cancelled
    #[error("Import task for '{name}' failed: {message}")]
    Task {
        /// Display name of the source
        name: String,
        /// Join error description
        message: String,
    },
}

/// Errors that can occur when building a lookup link
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No template produced a valid URL for the word
    #[error("Couldn't build a lookup link for '{word}': {reason}")]
    Unroutable {
        /// The word the user asked to look up
        word: String,
        /// Why the URL could not be built
        reason: String,
    },
}

impl LookupError {
    /// Generic message shown to the user instead of the technical reason
    pub fn user_message(&self) -> &'static str {
        "Couldn't build a lookup link"
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from decoding
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error from importing
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Error from lookup routing
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
