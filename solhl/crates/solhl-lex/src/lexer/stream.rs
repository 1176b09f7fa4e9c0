//! Coalesced token stream.

use std::iter::FusedIterator;

use crate::lexer::Lexer;
use crate::token::Token;

/// Token stream that merges runs of adjacent same-kind tokens.
///
/// A run becomes one token carrying the offset of its first member and the
/// text of the whole run. Empty lexemes are dropped. The merged stream still
/// covers the input exactly.
///
/// # Example
///
/// ```
/// use solhl_lex::{tokenize, TokenKind};
///
/// let tokens: Vec<_> = tokenize("x  \n\ny").map(|t| (t.kind, t.text)).collect();
/// assert_eq!(
///     tokens,
///     [(TokenKind::Name, "x"), (TokenKind::Text, "  \n\n"), (TokenKind::Name, "y")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    inner: Lexer<'a>,
    held: Option<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(inner: Lexer<'a>) -> Self {
        Self {
            source: inner.source(),
            inner,
            held: None,
        }
    }

    /// The underlying raw lexer.
    pub fn lexer(&self) -> &Lexer<'a> {
        &self.inner
    }

    fn next_raw(&mut self) -> Option<Token<'a>> {
        self.inner.by_ref().find(|token| !token.text.is_empty())
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = match self.held.take() {
            Some(token) => token,
            None => self.next_raw()?,
        };

        while let Some(token) = self.next_raw() {
            if token.kind == current.kind && token.offset == current.end() {
                current.text = &self.source[current.offset..token.end()];
            } else {
                self.held = Some(token);
                break;
            }
        }
        Some(current)
    }
}

impl FusedIterator for Tokens<'_> {}
