//! Source file with line/column lookup.
//!
//! [`SourceFile`] owns a source text and the byte offsets at which each line
//! starts, so that token offsets can be reported as `line:column`.

use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and precomputed line starts
///
/// # Examples
///
/// ```
/// use solhl_util::span::SourceFile;
///
/// let file = SourceFile::new("Ownable.sol", "pragma solidity ^0.8.0;");
/// assert_eq!(file.name(), "Ownable.sol");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline starts a new (empty) line.
    ///
    /// # Examples
    ///
    /// ```
    /// use solhl_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.sol", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Line and column are 1-indexed. The column counts characters, not
    /// bytes, from the start of the line. The end of the content is a valid
    /// offset; anything past it or inside a character is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use solhl_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.sol", "uint x;\nuint y;");
    /// assert_eq!(file.offset_to_line_col(0), Ok((1, 1)));
    /// assert_eq!(file.offset_to_line_col(13), Ok((2, 6)));
    /// assert!(file.offset_to_line_col(99).is_err());
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> SourceResult<(usize, usize)> {
        if offset > self.content.len() {
            return Err(SourceError::OffsetOutOfBounds {
                offset,
                file_len: self.content.len(),
            });
        }
        if !self.content.is_char_boundary(offset) {
            return Err(SourceError::NotCharBoundary { offset });
        }
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => return Ok((line + 1, 1)),
            Err(insert_point) => insert_point - 1,
        };
        let col = self.content[self.line_starts[line]..offset].chars().count();
        Ok((line + 1, col + 1))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_new() {
        let file = SourceFile::new("test.sol", "contract C {}");
        assert_eq!(file.name(), "test.sol");
        assert_eq!(file.content(), "contract C {}");
    }

    #[test]
    fn test_line_starts() {
        let file = SourceFile::new("test.sol", "line1\nline2\nline3");
        assert_eq!(&*file.line_starts, [0, 6, 12]);
        assert_eq!(file.offset_to_line_col(12), Ok((3, 1)));
    }

    #[test]
    fn test_trailing_newline_opens_line() {
        let file = SourceFile::new("test.sol", "a\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.offset_to_line_col(2), Ok((2, 1)));
    }

    #[test]
    fn test_offset_to_line_col_counts_chars() {
        let file = SourceFile::new("test.sol", "// é\nx");
        assert_eq!(file.offset_to_line_col(5), Ok((1, 5)));
        assert_eq!(file.offset_to_line_col(6), Ok((2, 1)));
    }

    #[test]
    fn test_offset_at_end() {
        let file = SourceFile::new("test.sol", "ab");
        assert_eq!(file.offset_to_line_col(2), Ok((1, 3)));
    }

    #[test]
    fn test_offset_past_end() {
        let file = SourceFile::new("test.sol", "ab");
        assert_eq!(
            file.offset_to_line_col(3),
            Err(SourceError::OffsetOutOfBounds {
                offset: 3,
                file_len: 2
            })
        );
    }

    #[test]
    fn test_offset_inside_char() {
        let file = SourceFile::new("test.sol", "é");
        assert_eq!(
            file.offset_to_line_col(1),
            Err(SourceError::NotCharBoundary { offset: 1 })
        );
    }
}
