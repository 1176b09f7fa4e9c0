//! Lexer module.
//!
//! This module organizes the lexer into the engine and the pattern matchers
//! its rule table is written with:
//! - `core` - the state-stack [`Lexer`]
//! - `stream` - the coalescing [`Tokens`] adapter
//! - [`comment`] - whitespace, comments and `#` lines
//! - [`identifier`] - identifiers, labels and word literals
//! - [`number`] - integer literals
//! - [`operator`] - operators and punctuation
//! - [`string`] - string and character literals
//! - [`signature`] - function definition and declaration look-ahead

pub mod comment;
mod core;
pub mod identifier;
pub mod number;
pub mod operator;
pub mod signature;
mod stream;
pub mod string;

pub use core::Lexer;
pub use stream::Tokens;
