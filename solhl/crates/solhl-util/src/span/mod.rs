//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range `start..end` into one source text.
//! Line and column numbers are not stored in the span; they are computed on
//! demand through a [`SourceFile`], which keeps the line start table.
//!
//! # Examples
//!
//! ```
//! use solhl_util::span::Span;
//!
//! let span = Span::new(10, 20);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.range(), 10..20);
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::ops::Range;

/// Source location span
///
/// # Examples
///
/// ```
/// use solhl_util::span::Span;
///
/// let span = Span::new(4, 9);
/// assert_eq!(span.start, 4);
/// assert_eq!(span.end, 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use solhl_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span of `len` bytes beginning at `start`
    #[inline]
    pub const fn with_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// The span as a `Range<usize>` for slicing
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
    }

    #[test]
    fn test_span_with_len() {
        assert_eq!(Span::with_len(3, 4), Span::new(3, 7));
    }

    #[test]
    fn test_span_range() {
        assert_eq!(Span::new(3, 8).range(), 3..8);
    }

    #[test]
    fn test_span_empty() {
        assert!(Span::default().is_empty());
        assert!(!Span::with_len(4, 1).is_empty());
    }
}
