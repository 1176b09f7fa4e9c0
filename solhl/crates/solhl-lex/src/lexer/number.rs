//! Integer literal matchers.
//!
//! Integer suffixes `l`/`u` are accepted in any case and any number. There
//! is no floating-point form.

use crate::cursor::Cursor;

fn suffix(c: &mut Cursor<'_>) {
    c.eat_while(|b| matches!(b, b'l' | b'L' | b'u' | b'U'));
}

/// `0x[0-9a-f]+[lu]*`, case-insensitive.
pub fn hex(c: &mut Cursor<'_>) -> bool {
    if !c.eat_str_ignore_case("0x") || c.eat_while(|b| b.is_ascii_hexdigit()) == 0 {
        return false;
    }
    suffix(c);
    true
}

/// `0[0-7]+[lu]*`
pub fn octal(c: &mut Cursor<'_>) -> bool {
    if !c.eat(b'0') || c.eat_while(|b| (b'0'..=b'7').contains(&b)) == 0 {
        return false;
    }
    suffix(c);
    true
}

/// `\d+[lu]*`
pub fn decimal(c: &mut Cursor<'_>) -> bool {
    if c.eat_while(|b| b.is_ascii_digit()) == 0 {
        return false;
    }
    suffix(c);
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
    fn test_hex() {
        assert_eq!(matched(hex, "0x1A3f;"), Some("0x1A3f"));
        assert_eq!(matched(hex, "0XffUL"), Some("0XffUL"));
        assert_eq!(matched(hex, "0x"), None);
        assert_eq!(matched(hex, "0xg"), None);
    }

    #[test]
    fn test_octal() {
        assert_eq!(matched(octal, "0755"), Some("0755"));
        assert_eq!(matched(octal, "0758"), Some("075"));
        assert_eq!(matched(octal, "09"), None);
        assert_eq!(matched(octal, "0"), None);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(matched(decimal, "123u"), Some("123u"));
        assert_eq!(matched(decimal, "09"), Some("09"));
        assert_eq!(matched(decimal, "1.5"), Some("1"));
        assert_eq!(matched(decimal, "x1"), None);
    }
}
