//! Error handling module for the solt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the solt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of solt commands.
#[derive(Error, Debug)]
pub enum SoltError {
    /// Error when the configuration cannot be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a theme entry is invalid.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Error when inputs are not recognized as Solidity.
    #[error("Detection failed: {0}")]
    Detection(String),

    /// Error when a token offset cannot be placed in its file.
    #[error("Source error: {0}")]
    Source(#[from] solhl_util::SourceError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SoltError.
pub type Result<T> = std::result::Result<T, SoltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SoltError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = SoltError::FileOperation("a.sol: not found".to_string());
        assert_eq!(err.to_string(), "File operation failed: a.sol: not found");
    }

    #[test]
    fn test_theme_error_display() {
        let err = SoltError::Theme("unknown token kind `Keyword.Typo`".to_string());
        assert_eq!(err.to_string(), "Theme error: unknown token kind `Keyword.Typo`");
    }

    #[test]
    fn test_detection_error_display() {
        let err = SoltError::Detection("1 file(s) not recognized".to_string());
        assert_eq!(err.to_string(), "Detection failed: 1 file(s) not recognized");
    }

    #[test]
    fn test_source_error_conversion() {
        let err: SoltError = solhl_util::SourceError::NotCharBoundary { offset: 3 }.into();
        assert_eq!(
            err.to_string(),
            "Source error: Offset 3 is not on a character boundary"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let solt_err: SoltError = io_err.into();
        assert!(matches!(solt_err, SoltError::Io(_)));
    }
}
