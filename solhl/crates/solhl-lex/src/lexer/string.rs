//! String and character literal matchers.

use crate::cursor::Cursor;

fn prefix(c: &mut Cursor<'_>) {
    let _ = c.eat_str("hex") || c.eat_str("unicode");
}

/// Optional `hex`/`unicode` prefix and an opening `"`.
pub fn open_double(c: &mut Cursor<'_>) -> bool {
    prefix(c);
    c.eat(b'"')
}

/// Optional `hex`/`unicode` prefix and an opening `'`.
pub fn open_single(c: &mut Cursor<'_>) -> bool {
    prefix(c);
    c.eat(b'\'')
}

/// A quoted single character: `'a'`, `'\n'`, `'\012'`, `'\x7f'`.
///
/// The body alternatives are tried in order and the first one followed by
/// the closing quote wins. Hex digits are case-insensitive.
pub fn char_literal(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'\'') {
        return false;
    }
    let body = *c;
    let closes = |len: usize| body.peek(len) == Some(b'\'');

    let len = if body.current() == Some(b'\\') {
        let escaped = body.rest()[1..].chars().next().filter(|&ch| ch != '\n');
        let octal = (1..=3).rev().find(|&n| {
            (1..=n).all(|i| body.peek(i).is_some_and(|b| (b'0'..=b'7').contains(&b)))
                && closes(n + 1)
        });
        let hex = (1..=2).rev().find(|&n| {
            matches!(body.peek(1), Some(b'x' | b'X'))
                && (2..2 + n).all(|i| body.peek(i).is_some_and(|b| b.is_ascii_hexdigit()))
                && closes(n + 2)
        });

        match escaped {
            Some(ch) if closes(1 + ch.len_utf8()) => Some(1 + ch.len_utf8()),
            _ => octal.map(|n| n + 1).or(hex.map(|n| n + 2)),
        }
    } else {
        body.current_char()
            .filter(|&ch| ch != '\'' && ch != '\n')
            .map(char::len_utf8)
            .filter(|&n| closes(n))
    };

    match len {
        Some(len) => {
            c.jump_to(body.position() + len + 1);
            true
        },
        None => false,
    }
}

/// Escape sequence: backslash followed by `u` and four hex digits, `x` and
/// two hex digits, one to three octal digits, or any other character except
/// a newline.
pub fn escape(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'\\') {
        return false;
    }
    let start = *c;
    let hex_run = |from: usize, n: usize| {
        (from..from + n).all(|i| start.peek(i).is_some_and(|b| b.is_ascii_hexdigit()))
    };

    match c.current() {
        Some(b'u') if hex_run(1, 4) => c.jump_to(start.position() + 5),
        Some(b'x') if hex_run(1, 2) => c.jump_to(start.position() + 3),
        Some(b'0'..=b'7') => {
            c.eat_while_max(3, |b| (b'0'..=b'7').contains(&b));
        },
        Some(b'\n') | None => return false,
        Some(_) => {
            c.advance();
        },
    }
    true
}

/// `[^\\"'\n]+`
pub fn text(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| !matches!(b, b'\\' | b'"' | b'\'' | b'\n')) > 0
}

/// A lone backslash.
pub fn backslash(c: &mut Cursor<'_>) -> bool {
    c.eat(b'\\')
}

/// `"`
pub fn double_quote(c: &mut Cursor<'_>) -> bool {
    c.eat(b'"')
}

/// `'`
pub fn single_quote(c: &mut Cursor<'_>) -> bool {
    c.eat(b'\'')
}
