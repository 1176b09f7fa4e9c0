//! Operator and punctuation matchers.

use crate::cursor::Cursor;

/// One of `~!%^&*+=|?:<>/-`.
pub fn operator(c: &mut Cursor<'_>) -> bool {
    c.eat_if(|b| b"~!%^&*+=|?:<>/-".contains(&b))
}

/// One of `()[],.`.
pub fn punctuation(c: &mut Cursor<'_>) -> bool {
    c.eat_if(|b| b"()[],.".contains(&b))
}

/// A stray comment terminator `*/`.
pub fn comment_close(c: &mut Cursor<'_>) -> bool {
    c.eat_str("*/")
}

/// `;`
pub fn semicolon(c: &mut Cursor<'_>) -> bool {
    c.eat(b';')
}

/// `:`
pub fn colon(c: &mut Cursor<'_>) -> bool {
    c.eat(b':')
}

/// `{`
pub fn open_brace(c: &mut Cursor<'_>) -> bool {
    c.eat(b'{')
}

/// `}`
pub fn close_brace(c: &mut Cursor<'_>) -> bool {
    c.eat(b'}')
}

/// `{` or `}`.
pub fn brace(c: &mut Cursor<'_>) -> bool {
    c.eat_if(|b| b == b'{' || b == b'}')
}
