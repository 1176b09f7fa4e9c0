//! solhl-util - Shared foundation types for the solhl highlighter
//!
//! This crate holds the small set of types that the lexer and the `solt`
//! command-line tool both need:
//!
//! - [`Span`] - a half-open byte range into a source text
//! - [`SourceFile`] - source text with precomputed line starts, used to turn
//!   token offsets into `line:column` positions
//! - [`error`] - error enums for the operations above
//!
//! The hash collections used for keyword lookups are re-exported here so the
//! whole workspace agrees on one hasher.
//!
//! # Example
//!
//! ```
//! use solhl_util::{SourceFile, Span};
//!
//! let file = SourceFile::new("Token.sol", "contract A {\n}\n");
//! let span = Span::new(13, 14);
//! assert_eq!(file.offset_to_line_col(span.start), Ok((2, 1)));
//! assert_eq!(&file.content()[span.range()], "}");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

mod edge_cases;

pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
