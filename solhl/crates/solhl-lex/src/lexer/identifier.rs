//! Identifier, label and word matchers.

use crate::cursor::{is_word, is_word_boundary, Cursor};

/// `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn identifier(c: &mut Cursor<'_>) -> bool {
    if !c.eat_if(|b| b.is_ascii_alphabetic() || b == b'_') {
        return false;
    }
    c.eat_while(is_word);
    true
}

/// An identifier followed by a single `:` (not `::`).
pub fn label(c: &mut Cursor<'_>) -> bool {
    identifier(c) && c.eat(b':') && c.current() != Some(b':')
}

/// The word `case` standing on its own.
pub fn case_keyword(c: &mut Cursor<'_>) -> bool {
    is_word_boundary(c) && c.eat_str("case") && is_word_boundary(c)
}

/// `true`, `false` or `NULL` at the end of a word.
pub fn builtin_literal(c: &mut Cursor<'_>) -> bool {
    let word = c.eat_str("true") || c.eat_str("false") || c.eat_str("NULL");
    word && !c.current().is_some_and(is_word)
}
