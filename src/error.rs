//! Error types for the onesheet library.

use std::io;
use thiserror::Error;

/// Result type alias for onesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a PDF.
///
/// Parsing, measuring, wrapping, layout, and serialization are total
/// functions and never fail; errors only arise at the edges, when reading
/// files or loading theme configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Theme configuration could not be deserialized.
    #[error("Theme parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme configuration is structurally valid but unusable.
    #[error("Invalid theme: {0}")]
    Theme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Theme("body_size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid theme: body_size must be positive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
