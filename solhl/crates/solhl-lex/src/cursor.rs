//! Byte cursor for anchored pattern matching.
//!
//! Every rule pattern is anchored at the current lexing position. Matchers
//! receive a copy of the [`Cursor`], advance it over whatever they accept and
//! report success; the lexer then measures how far the copy moved.
//!
//! The character classes used by the rule table are ASCII, so most scanning
//! is done on bytes. Non-ASCII bytes never satisfy an ASCII predicate, which
//! keeps every stop position on a character boundary. Operations that consume
//! an arbitrary character ([`Cursor::advance`]) step over the whole UTF-8
//! sequence.

/// A copyable position within a source string.
///
/// # Example
///
/// ```
/// use solhl_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("uint256 x;");
/// assert_eq!(cursor.eat_while(|b| b.is_ascii_alphanumeric()), 7);
/// assert_eq!(cursor.rest(), " x;");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Creates a cursor at byte `position` of `source`.
    ///
    /// `position` must lie on a character boundary.
    pub fn at(source: &'a str, position: usize) -> Self {
        debug_assert!(source.is_char_boundary(position));
        Self { source, position }
    }

    /// Current byte position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The whole source text.
    #[inline]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Byte at the current position.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Byte `offset` bytes past the current position.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Character at the current position.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character immediately before the current position.
    #[inline]
    pub fn prev_char(&self) -> Option<char> {
        self.source[..self.position].chars().next_back()
    }

    /// Returns true at the start of the input or right after a newline.
    #[inline]
    pub fn is_line_start(&self) -> bool {
        self.position == 0 || self.source.as_bytes()[self.position - 1] == b'\n'
    }

    /// Consumes one character, however many bytes it occupies.
    ///
    /// Returns false at end of input.
    pub fn advance(&mut self) -> bool {
        match self.current_char() {
            Some(c) => {
                self.position += c.len_utf8();
                true
            },
            None => false,
        }
    }

    /// Moves the cursor to byte position `position`, which must not be
    /// behind the current one.
    #[inline]
    pub fn jump_to(&mut self, position: usize) {
        debug_assert!(position >= self.position && position <= self.source.len());
        self.position = position;
    }

    /// Consumes `byte` if it is next.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.current() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next byte if it satisfies `pred`.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.current() {
            Some(b) if pred(b) => {
                self.position += 1;
                true
            },
            _ => false,
        }
    }

    /// Consumes `text` if the remainder starts with it.
    #[inline]
    pub fn eat_str(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.position += text.len();
            true
        } else {
            false
        }
    }

    /// Consumes `text` compared ASCII case-insensitively.
    pub fn eat_str_ignore_case(&mut self, text: &str) -> bool {
        let bytes = self.rest().as_bytes();
        if bytes.len() >= text.len() && bytes[..text.len()].eq_ignore_ascii_case(text.as_bytes()) {
            self.position += text.len();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds and returns how many were consumed.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.position;
        let bytes = self.source.as_bytes();
        while self.position < bytes.len() && pred(bytes[self.position]) {
            self.position += 1;
        }
        self.position - start
    }

    /// Consumes at most `max` bytes satisfying `pred`.
    pub fn eat_while_max(&mut self, max: usize, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.position;
        let bytes = self.source.as_bytes();
        while self.position - start < max
            && self.position < bytes.len()
            && pred(bytes[self.position])
        {
            self.position += 1;
        }
        self.position - start
    }

    /// Consumes everything up to and including the next `\n`, or the rest of
    /// the input if there is none.
    pub fn eat_line(&mut self) {
        match self.rest().find('\n') {
            Some(i) => self.position += i + 1,
            None => self.position = self.source.len(),
        }
    }
}

/// Matches Onigmo's `\s`: space, tab, newline, carriage return, form feed and
/// vertical tab.
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b'\x0b')
}

/// Matches `\w` in its ASCII form.
#[inline]
pub const fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Word-boundary test between the character before the cursor and the one
/// at it.
#[inline]
pub fn is_word_boundary(cursor: &Cursor<'_>) -> bool {
    let before = cursor.prev_char().is_some_and(|c| c.is_ascii() && is_word(c as u8));
    let after = cursor.current().is_some_and(is_word);
    before != after
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_multibyte() {
        let mut cursor = Cursor::new("é;");
        assert!(cursor.advance());
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current(), Some(b';'));
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), cursor.source().len());
    }

    #[test]
    fn test_line_start() {
        let source = "a\nb";
        assert!(Cursor::at(source, 0).is_line_start());
        assert!(!Cursor::at(source, 1).is_line_start());
        assert!(Cursor::at(source, 2).is_line_start());
    }

    #[test]
    fn test_eat_line() {
        let mut cursor = Cursor::new("// x\ny");
        cursor.eat_line();
        assert_eq!(cursor.rest(), "y");
        cursor.eat_line();
        assert_eq!(cursor.position(), cursor.source().len());
    }

    #[test]
    fn test_eat_while_stops_on_boundary() {
        let mut cursor = Cursor::new("abé");
        assert_eq!(cursor.eat_while(|b| b.is_ascii_alphabetic()), 2);
        assert_eq!(cursor.current_char(), Some('é'));
    }

    #[test]
    fn test_eat_while_max() {
        let mut cursor = Cursor::new("01234");
        assert_eq!(cursor.eat_while_max(3, |b| b.is_ascii_digit()), 3);
        assert_eq!(cursor.rest(), "34");
    }

    #[test]
    fn test_eat_str_ignore_case() {
        let mut cursor = Cursor::new("0XfF");
        assert!(cursor.eat_str_ignore_case("0x"));
        assert_eq!(cursor.rest(), "fF");
    }

    #[test]
    fn test_word_boundary() {
        let source = "acase case";
        assert!(!is_word_boundary(&Cursor::at(source, 1)));
        assert!(is_word_boundary(&Cursor::at(source, 0)));
        assert!(is_word_boundary(&Cursor::at(source, 6)));
        assert!(is_word_boundary(&Cursor::at(source, 5)));
    }

    #[test]
    fn test_is_space() {
        for b in [b' ', b'\t', b'\n', b'\r', b'\x0b', b'\x0c'] {
            assert!(is_space(b));
        }
        assert!(!is_space(b'a'));
    }
}
