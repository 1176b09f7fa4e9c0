//! Core error types for solhl-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Offset past the end of the file
    #[error("Offset {offset} out of bounds: file has {file_len} bytes")]
    OffsetOutOfBounds {
        /// Requested byte offset
        offset: usize,
        /// Length of the file content in bytes
        file_len: usize,
    },

    /// Offset inside a multi-byte character
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// Requested byte offset
        offset: usize,
    },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = SourceError::OffsetOutOfBounds {
            offset: 9,
            file_len: 4,
        };
        assert_eq!(err.to_string(), "Offset 9 out of bounds: file has 4 bytes");
    }

    #[test]
    fn test_not_char_boundary_display() {
        let err = SourceError::NotCharBoundary { offset: 1 };
        assert_eq!(err.to_string(), "Offset 1 is not on a character boundary");
    }
}
