//! Whitespace, comment and preprocessor-line matchers.
//!
//! Comments in the rule table share states with whitespace, so both live
//! here together with the `#` line matchers used by the macro and `#if 0`
//! states.

use crate::cursor::{is_space, is_word, Cursor};

/// `[ \t\r]+`
pub fn inline_spaces(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r')) > 0
}

/// Backslash followed by a newline.
pub fn line_continuation(c: &mut Cursor<'_>) -> bool {
    c.eat_str("\\\n")
}

/// `/* ... */`, allowing a backslash-newline right after the opening `/` or
/// right before the closing `/`.
///
/// The body ends at the first closing sequence. A comment that is never
/// closed runs to the end of the input.
pub fn block_comment(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'/') {
        return false;
    }
    c.eat_str("\\\n");
    if !c.eat(b'*') {
        return false;
    }

    let body = c.rest().as_bytes();
    let mut i = 0;
    while let Some(star) = body[i..].iter().position(|&b| b == b'*').map(|p| p + i) {
        let tail = &body[star + 1..];
        if tail.starts_with(b"/") {
            c.jump_to(c.position() + star + 2);
            return true;
        }
        if tail.starts_with(b"\\\n/") {
            c.jump_to(c.position() + star + 4);
            return true;
        }
        i = star + 1;
    }
    c.jump_to(c.source().len());
    true
}

/// `\n+`
pub fn newlines(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| b == b'\n') > 0
}

/// A single `\n`.
pub fn newline(c: &mut Cursor<'_>) -> bool {
    c.eat(b'\n')
}

/// `//` up to and including the end of the line, or to the end of input.
pub fn line_comment(c: &mut Cursor<'_>) -> bool {
    if !c.eat_str("//") {
        return false;
    }
    c.eat_line();
    true
}

/// `#if` followed by one whitespace character and `0`.
pub fn if0_open(c: &mut Cursor<'_>) -> bool {
    c.eat_str("#if") && c.eat_if(is_space) && c.eat(b'0')
}

/// A lone `#`.
pub fn hash(c: &mut Cursor<'_>) -> bool {
    c.eat(b'#')
}

/// `[^/\n\\]+`
pub fn macro_text(c: &mut Cursor<'_>) -> bool {
    c.eat_while(|b| !matches!(b, b'/' | b'\n' | b'\\')) > 0
}

/// Backslash followed by any character, newline included.
pub fn macro_escape(c: &mut Cursor<'_>) -> bool {
    c.eat(b'\\') && c.advance()
}

/// A lone `/`.
pub fn slash(c: &mut Cursor<'_>) -> bool {
    c.eat(b'/')
}

/// `\s*#` at the start of a line, leaving the cursor after the `#`.
fn directive_start(c: &mut Cursor<'_>) -> bool {
    if !c.is_line_start() {
        return false;
    }
    c.eat_while(is_space);
    c.eat(b'#')
}

/// Nested `#if` (also `#ifdef` and `#ifndef`) inside an excluded block.
pub fn if0_nested(c: &mut Cursor<'_>) -> bool {
    directive_start(c) && c.eat_str("if")
}

/// `#else` or `#elif` inside an excluded block.
pub fn if0_else(c: &mut Cursor<'_>) -> bool {
    if !directive_start(c) {
        return false;
    }
    c.eat_while(is_space);
    c.eat_str("el") && (c.eat_str("se") || c.eat_str("if"))
}

/// `#endif` line, through the first newline not escaped by a backslash,
/// or to the end of input.
pub fn if0_endif(c: &mut Cursor<'_>) -> bool {
    if !directive_start(c) {
        return false;
    }
    c.eat_while(is_space);
    if !c.eat_str("endif") || c.current().is_some_and(is_word) {
        return false;
    }

    let bytes = c.source().as_bytes();
    let mut i = c.position();
    while i < bytes.len() {
        if bytes[i] == b'\n' && bytes[i - 1] != b'\\' {
            c.jump_to(i + 1);
            return true;
        }
        i += 1;
    }
    c.jump_to(bytes.len());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(f: fn(&mut Cursor<'_>) -> bool, source: &str) -> Option<&str> {
        let mut c = Cursor::new(source);
        f(&mut c).then(|| &source[..c.position()])
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(matched(block_comment, "/* a */ b"), Some("/* a */"));
        assert_eq!(matched(block_comment, "/**/x"), Some("/**/"));
        assert_eq!(matched(block_comment, "/* a\n b */"), Some("/* a\n b */"));
        assert_eq!(matched(block_comment, "/\\\n* a *\\\n/ b"), Some("/\\\n* a *\\\n/"));
        assert_eq!(matched(block_comment, "/ * a */"), None);
    }

    #[test]
    fn test_block_comment_unterminated() {
        assert_eq!(matched(block_comment, "/* open"), Some("/* open"));
        assert_eq!(matched(block_comment, "/*/"), Some("/*/"));
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(matched(line_comment, "// x\ny"), Some("// x\n"));
        assert_eq!(matched(line_comment, "// end"), Some("// end"));
        assert_eq!(matched(line_comment, "/ x"), None);
    }

    #[test]
    fn test_if0_open() {
        assert_eq!(matched(if0_open, "#if 0\n"), Some("#if 0"));
        assert_eq!(matched(if0_open, "#if\t0"), Some("#if\t0"));
        assert_eq!(matched(if0_open, "#if 1"), None);
        assert_eq!(matched(if0_open, "#if0"), None);
    }

    #[test]
    fn test_if0_directives_need_line_start() {
        let source = "x #endif\n";
        let mut c = Cursor::at(source, 1);
        assert!(!if0_endif(&mut c));
        assert_eq!(matched(if0_endif, "  # endif\nx"), Some("  # endif\n"));
        assert_eq!(matched(if0_endif, "#endifx\n"), None);
    }

    #[test]
    fn test_if0_endif_skips_escaped_newline() {
        assert_eq!(matched(if0_endif, "#endif a\\\nb\nc"), Some("#endif a\\\nb\n"));
        assert_eq!(matched(if0_endif, "#endif"), Some("#endif"));
    }

    #[test]
    fn test_if0_else() {
        assert_eq!(matched(if0_else, "#else\n"), Some("#else"));
        assert_eq!(matched(if0_else, "# elif X\n"), Some("# elif"));
        assert_eq!(matched(if0_else, "#end\n"), None);
    }

    #[test]
    fn test_if0_nested() {
        assert_eq!(matched(if0_nested, "\n  #ifdef X"), Some("\n  #if"));
    }

    #[test]
    fn test_macro_pieces() {
        assert_eq!(matched(macro_text, "define X 1/2"), Some("define X 1"));
        assert_eq!(matched(macro_escape, "\\\nnext"), Some("\\\n"));
        assert_eq!(matched(macro_escape, "\\"), None);
    }
}
