//! solhl-lex - Syntax-highlighting lexer for Solidity
//!
//! This crate turns Solidity source text into a lazy stream of classified
//! lexemes for a highlighter. It classifies; it never validates. Input that
//! no rule recognizes comes out as [`TokenKind::Error`] tokens and lexing
//! carries on, so every input produces a stream whose texts concatenate back
//! to the input.
//!
//! # Example Usage
//!
//! ```
//! use solhl_lex::{tokenize, TokenKind};
//!
//! let source = "function transfer(address to) {";
//! let names: Vec<_> = tokenize(source)
//!     .filter(|t| t.kind == TokenKind::NameFunction)
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(names, ["transfer"]);
//!
//! let text: String = tokenize(source).map(|t| t.text).collect();
//! assert_eq!(text, source);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds and tokens
//! - [`keywords`] - identifier classification
//! - [`cursor`] - byte cursor the pattern matchers advance
//! - [`rules`] - rule tables, their validation, and the Solidity table
//! - [`lexer`] - the state-stack engine, the coalescing stream and the
//!   pattern matchers
//! - [`registry`] - language metadata and content sniffing
//! - [`error`] - rule table errors
//!
//! # How Lexing Works
//!
//! The lexer keeps a stack of states. At each step the rules of the top
//! state are tried in order at the current position, and the first match
//! wins, even when a later rule would match more text. A rule emits tokens
//! and may push a state (entering a string, a function body, a `#` line) or
//! pop back out. Lexing ends when the input is consumed, whatever is left on
//! the stack; an unterminated string simply ends.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod registry;
pub mod rules;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use error::{TableError, TableResult};
pub use lexer::{Lexer, Tokens};
pub use registry::{analyze_text, LanguageInfo, SOLIDITY};
pub use rules::{RuleTable, StateId};
pub use token::{Token, TokenKind};

/// Tokenizes Solidity source, merging adjacent tokens of the same kind.
///
/// Use [`Lexer::new`] for the unmerged stream.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Lexer::new(source).coalesce()
}
