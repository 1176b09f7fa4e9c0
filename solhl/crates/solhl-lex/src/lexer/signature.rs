//! Function definition and declaration look-ahead.
//!
//! At the top level a function is recognized by its shape rather than by the
//! `function` keyword:
//!
//! ```text
//! return-args  name  (params)  gap  terminator
//! ```
//!
//! * `return-args` is a run of word characters, `*` and whitespace that ends
//!   in whitespace or `*`
//! * `name` is an identifier
//! * `params` is optional whitespace, `(`, anything but `;`, and the first
//!   `)` after which the rest of the shape matches
//! * `gap` is any mix of whitespace, `//` line comments and `/* */` comments
//! * `terminator` is `{` for a definition and `;` for a declaration
//!
//! The matcher is hand-written and linear in the scanned text: the name is
//! found by scanning the return-args run once and walking back from the `(`,
//! and the search for `)` never crosses a `;`. Gaps may run past the `;`
//! inside comments, so comment ends are looked up in a [`GapIndex`] kept by
//! the lexer for the whole source, and every gap is walked at most once.

use std::ops::Range;

use solhl_util::FxHashMap;

use crate::cursor::{is_space, is_word, Cursor};

/// Closing token of a function shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// `{`: a definition with a body.
    Brace,
    /// `;`: a declaration.
    Semicolon,
}

impl Terminator {
    /// The terminator byte.
    pub const fn byte(self) -> u8 {
        match self {
            Terminator::Brace => b'{',
            Terminator::Semicolon => b';',
        }
    }
}

/// Byte ranges of a matched function shape, in source coordinates.
///
/// The ranges are contiguous and in order: together they cover exactly the
/// matched text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Return arguments, including the `function` keyword when present
    pub return_args: Range<usize>,
    /// Function name
    pub name: Range<usize>,
    /// Parameter list with its leading whitespace
    pub params: Range<usize>,
    /// Whitespace and comments between `)` and the terminator
    pub gap: Range<usize>,
    /// The terminator itself
    pub terminator: Range<usize>,
}

impl Signature {
    /// Total length of the match in bytes.
    pub fn len(&self) -> usize {
        self.terminator.end - self.return_args.start
    }

    /// Always false: a signature spans at least the name and parentheses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn is_return_arg(b: u8) -> bool {
    is_word(b) || b == b'*' || is_space(b)
}

/// Comment ends and gap ends of one source text.
///
/// Positions of `\n` and `*/` are collected on first use; gap ends are
/// remembered at every gap start and after every comment, which is where
/// the gaps of two `)` candidates can meet.
#[derive(Debug, Clone, Default)]
pub struct GapIndex {
    newlines: Option<Vec<usize>>,
    block_ends: Option<Vec<usize>>,
    gap_ends: FxHashMap<usize, usize>,
    #[cfg(test)]
    steps: usize,
}

impl GapIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// First `\n` at or after `from`.
    fn next_newline(&mut self, bytes: &[u8], from: usize) -> Option<usize> {
        if self.newlines.is_none() {
            self.count(bytes.len());
        }
        let newlines = self.newlines.get_or_insert_with(|| {
            bytes.iter().enumerate().filter_map(|(i, &b)| (b == b'\n').then_some(i)).collect()
        });
        next_at_or_after(newlines, from)
    }

    /// First `*/` starting at or after `from`.
    fn next_block_end(&mut self, bytes: &[u8], from: usize) -> Option<usize> {
        if self.block_ends.is_none() {
            self.count(bytes.len());
        }
        let block_ends = self.block_ends.get_or_insert_with(|| {
            bytes.windows(2).enumerate().filter_map(|(i, w)| (w == b"*/").then_some(i)).collect()
        });
        next_at_or_after(block_ends, from)
    }

    /// End of the whitespace and complete comments starting at `start`.
    fn gap_end(&mut self, bytes: &[u8], start: usize) -> usize {
        let mut pos = start;
        let mut joins = vec![start];
        let end = loop {
            if let Some(&end) = self.gap_ends.get(&pos) {
                break end;
            }
            self.count(1);
            let next = match (bytes.get(pos), bytes.get(pos + 1)) {
                (Some(&b), _) if is_space(b) => {
                    pos += 1;
                    continue;
                },
                (Some(b'/'), Some(b'/')) => self.next_newline(bytes, pos + 2).map(|nl| nl + 1),
                (Some(b'/'), Some(b'*')) => self.next_block_end(bytes, pos + 2).map(|e| e + 2),
                _ => None,
            };
            match next {
                Some(next) => {
                    pos = next;
                    joins.push(pos);
                },
                None => break pos,
            }
        };
        for join in joins {
            self.gap_ends.insert(join, end);
        }
        end
    }

    #[inline]
    fn count(&mut self, _work: usize) {
        #[cfg(test)]
        {
            self.steps += _work;
        }
    }

    /// Work done so far, in bytes indexed plus gap steps taken.
    #[cfg(test)]
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }
}

fn next_at_or_after(sorted: &[usize], from: usize) -> Option<usize> {
    sorted.get(sorted.partition_point(|&i| i < from)).copied()
}

/// Matches a function shape at the cursor.
///
/// `gaps` must belong to the cursor's source text.
pub fn match_function(
    cursor: Cursor<'_>,
    terminator: Terminator,
    gaps: &mut GapIndex,
) -> Option<Signature> {
    let bytes = cursor.source().as_bytes();
    let start = cursor.position();

    let mut run = cursor;
    run.eat_while(is_return_arg);
    let open_paren = run.position();
    if bytes.get(open_paren) != Some(&b'(') {
        return None;
    }

    let mut name_end = open_paren;
    while name_end > start && is_space(bytes[name_end - 1]) {
        name_end -= 1;
    }
    let mut name_start = name_end;
    while name_start > start && is_word(bytes[name_start - 1]) {
        name_start -= 1;
    }
    // return-args needs two bytes and must end in whitespace or `*`, which
    // the byte before a maximal word run always is
    if name_start == name_end || name_start < start + 2 || bytes[name_start].is_ascii_digit() {
        return None;
    }

    let mut close = open_paren + 1;
    loop {
        let offset = bytes[close..].iter().position(|&b| b == b')' || b == b';')?;
        close += offset;
        if bytes[close] == b';' {
            return None;
        }
        let gap_end = gaps.gap_end(bytes, close + 1);
        if bytes.get(gap_end) == Some(&terminator.byte()) {
            return Some(Signature {
                return_args: start..name_start,
                name: name_start..name_end,
                params: name_end..close + 1,
                gap: close + 1..gap_end,
                terminator: gap_end..gap_end + 1,
            });
        }
        close += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(source: &str, terminator: Terminator) -> Option<[&str; 5]> {
        let sig = match_function(Cursor::new(source), terminator, &mut GapIndex::new())?;
        Some([
            &source[sig.return_args],
            &source[sig.name],
            &source[sig.params],
            &source[sig.gap],
            &source[sig.terminator],
        ])
    }

    #[test]
    fn test_definition() {
        assert_eq!(
            parts("function foo(uint a) {", Terminator::Brace),
            Some(["function ", "foo", "(uint a)", " ", "{"])
        );
    }

    #[test]
    fn test_declaration_without_gap() {
        assert_eq!(
            parts("function foo(uint a);", Terminator::Semicolon),
            Some(["function ", "foo", "(uint a)", "", ";"])
        );
        assert_eq!(parts("function foo(uint a);", Terminator::Brace), None);
    }

    #[test]
    fn test_modifiers_between_parens_and_brace() {
        assert_eq!(
            parts("function get() public view returns (uint) {", Terminator::Brace),
            Some(["function ", "get", "() public view returns (uint)", " ", "{"])
        );
    }

    #[test]
    fn test_space_before_params() {
        assert_eq!(
            parts("function foo (uint a) {", Terminator::Brace),
            Some(["function ", "foo", " (uint a)", " ", "{"])
        );
    }

    #[test]
    fn test_pointer_return() {
        assert_eq!(
            parts("char *name() {", Terminator::Brace),
            Some(["char *", "name", "()", " ", "{"])
        );
    }

    #[test]
    fn test_gap_comments() {
        assert_eq!(
            parts("function f() // note\n /* x; */ {", Terminator::Brace),
            Some(["function ", "f", "()", " // note\n /* x; */ ", "{"])
        );
    }

    #[test]
    fn test_semicolon_in_params_rejects() {
        assert_eq!(parts("function f(a; b) {", Terminator::Brace), None);
    }

    #[test]
    fn test_needs_return_args() {
        assert_eq!(parts("foo() {", Terminator::Brace), None);
        assert_eq!(parts(" foo() {", Terminator::Brace), None);
        assert_eq!(parts("  foo() {", Terminator::Brace), Some(["  ", "foo", "()", " ", "{"]));
    }

    #[test]
    fn test_name_must_not_start_with_digit() {
        assert_eq!(parts("function 9lives() {", Terminator::Brace), None);
    }

    #[test]
    fn test_no_paren() {
        assert_eq!(parts("contract Token {", Terminator::Brace), None);
        assert_eq!(parts("uint x = (1);", Terminator::Semicolon), None);
    }

    #[test]
    fn test_call_statement_has_declaration_shape() {
        assert_eq!(
            parts("emit Transfer(a, b);", Terminator::Semicolon),
            Some(["emit ", "Transfer", "(a, b)", "", ";"])
        );
        assert_eq!(parts("x = f(a);", Terminator::Semicolon), None);
    }

    #[test]
    fn test_unterminated_gap_comment() {
        assert_eq!(parts("function f() /* {", Terminator::Brace), None);
        assert_eq!(parts("function f() // {", Terminator::Brace), None);
        assert_eq!(
            parts("function f() /* ) */ {", Terminator::Brace),
            Some(["function ", "f", "()", " /* ) */ ", "{"])
        );
    }

    fn work(source: &str, terminator: Terminator) -> usize {
        let mut gaps = GapIndex::new();
        assert_eq!(match_function(Cursor::new(source), terminator, &mut gaps), None);
        gaps.steps()
    }

    #[test]
    fn test_unclosed_comments_after_parens_stay_linear() {
        for tail in [") /*", ") //"] {
            let source = format!("a f() /*{}", tail.repeat(4000));
            assert!(work(&source, Terminator::Brace) <= 4 * source.len(), "{tail:?}");
        }
    }

    #[test]
    fn test_shared_gap_tail_is_walked_once() {
        let source = format!("a f(){}*/{} x", ") /* ".repeat(2000), " /**/".repeat(2000));
        assert!(work(&source, Terminator::Brace) <= 4 * source.len());
        assert!(work(&source, Terminator::Semicolon) <= 4 * source.len());
    }
}
