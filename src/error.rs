//! Error types for the chatpress library.

use std::io;
use thiserror::Error;

/// Result type alias for chatpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing export artifacts.
///
/// Malformed Markdown in message bodies is never an error: the tokenizer
/// degrades unmatched syntax to literal text. The failure surface is limited
/// to page setup and the file/JSON boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing an artifact to disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing JSON (transcripts, page programs).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The page geometry leaves no room to lay text out.
    #[error("Invalid page geometry: {0}")]
    Geometry(String),

    /// Generic rendering error with message.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Geometry("margins exceed page width".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid page geometry: margins exceed page width"
        );

        let err = Error::Render("bad state".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad state");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
