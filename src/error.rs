//! Error types for unrtf library.

use std::io;
use thiserror::Error;

/// Result type alias for unrtf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during RTF processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a structurally valid RTF document.
    #[error("Invalid RTF document: {0}")]
    InvalidDocument(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Create an invalid-document error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidDocument(message.into())
    }

    /// Check if this is an invalid-document error.
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, Error::InvalidDocument(_))
    }
}
