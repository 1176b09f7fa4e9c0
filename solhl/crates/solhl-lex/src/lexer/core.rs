//! Core lexer implementation.
//!
//! The lexer is a stack machine over a [`RuleTable`]. Each step looks at the
//! state on top of the stack, tries its rules in order at the current
//! position, and applies the first one that matches: the cursor moves past
//! the match, the rule's action queues zero or more tokens, and its
//! transition pushes or pops the stack. Tokens are handed out lazily through
//! [`Iterator`].

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::Range;

use tracing::{error, trace, warn};

use crate::cursor::Cursor;
use crate::keywords;
use crate::lexer::signature::{GapIndex, Signature};
use crate::lexer::stream::Tokens;
use crate::rules::{solidity, Action, Match, Rule, RuleTable, StateId, Transition};
use crate::token::{Token, TokenKind};

/// Consecutive zero-width steps allowed before a character is forced out as
/// an error.
const MAX_ZERO_WIDTH_STEPS: u32 = 32;

/// Nesting limit for re-lexing the parts of a function shape.
const MAX_RELEX_DEPTH: usize = 16;

/// Raw token stream over one source text.
///
/// The stream is finite, forward-only and covers the input exactly: the
/// token texts concatenate to the source. Adjacent tokens of the same kind
/// are not merged; see [`Lexer::coalesce`] for that.
///
/// # Example
///
/// ```
/// use solhl_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("uint x;").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::KeywordType, TokenKind::Text, TokenKind::Name, TokenKind::Punctuation]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Rules driving the state machine.
    table: &'a RuleTable,

    /// The text being tokenized.
    source: &'a str,

    /// Current byte position in `source`.
    position: usize,

    /// Offset of `source` within the text the caller handed in; non-zero
    /// only for nested lexers.
    base: usize,

    /// Active states, bottom first. Never empty.
    stack: Vec<StateId>,

    /// Tokens produced but not yet returned.
    pending: VecDeque<Token<'a>>,

    /// Comment and gap positions for function-shape look-ahead.
    gaps: GapIndex,

    /// Zero-width steps since the cursor last moved.
    zero_width_steps: u32,

    /// Nesting level of this lexer.
    depth: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` using the Solidity rules.
    pub fn new(source: &'a str) -> Self {
        Self::with_table(solidity::table(), source)
    }

    /// Creates a lexer over `source` using `table`.
    pub fn with_table(table: &'a RuleTable, source: &'a str) -> Self {
        Self::nested(table, source, 0, 0)
    }

    fn nested(table: &'a RuleTable, source: &'a str, base: usize, depth: usize) -> Self {
        Self {
            table,
            source,
            position: 0,
            base,
            stack: table.start().to_vec(),
            pending: VecDeque::new(),
            gaps: GapIndex::new(),
            zero_width_steps: 0,
            depth,
        }
    }

    /// The text being tokenized.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte position up to which input has been consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Active states, bottom first.
    #[inline]
    pub fn state_stack(&self) -> &[StateId] {
        &self.stack
    }

    /// Wraps the stream so that adjacent tokens of the same kind are merged.
    pub fn coalesce(self) -> Tokens<'a> {
        Tokens::new(self)
    }

    #[inline]
    fn current_state(&self) -> StateId {
        // The stack starts non-empty and pops never remove the last entry.
        self.stack.last().copied().unwrap_or(StateId::Root)
    }

    /// Runs one matching step.
    fn step(&mut self) {
        let state = self.current_state();
        let cursor = Cursor::at(self.source, self.position);
        let table = self.table;

        let gaps = &mut self.gaps;
        let found = table
            .rules(state)
            .iter()
            .find_map(|rule| rule.pattern.matches(cursor, gaps).map(|m| (rule, m)));

        match found {
            Some((rule, m)) => self.apply(state, rule, m),
            None => {
                error!(state = %state, offset = self.base + self.position, "no rule matched");
                self.emit_error_char();
            },
        }
    }

    fn apply(&mut self, state: StateId, rule: &Rule, m: Match) {
        let start = self.position;
        let len = m.len();
        self.position += len;

        match rule.action {
            Action::Emit(kind) => self.emit(kind, start..self.position),
            Action::Classify => {
                let kind = keywords::classify(&self.source[start..self.position]);
                self.emit(kind, start..self.position);
            },
            Action::Signature => {
                if let Match::Signature(signature) = &m {
                    self.expand_signature(signature);
                }
            },
            Action::Nothing => {},
        }

        match rule.transition {
            Transition::Stay => {},
            Transition::Push(next) => {
                trace!(from = %state, to = %next, offset = self.base + start, "push");
                self.stack.push(next);
            },
            Transition::Pop => self.pop(state),
        }

        if len > 0 {
            self.zero_width_steps = 0;
        } else {
            self.zero_width_steps += 1;
            if self.zero_width_steps > MAX_ZERO_WIDTH_STEPS {
                warn!(state = %state, offset = self.base + self.position, "zero-width loop");
                self.emit_error_char();
            }
        }
    }

    fn pop(&mut self, state: StateId) {
        if self.stack.len() > 1 {
            self.stack.pop();
            trace!(from = %state, to = %self.current_state(), "pop");
        } else {
            error!(state = %state, "pop on the start state ignored");
        }
    }

    /// Queues the parts of a function shape.
    fn expand_signature(&mut self, signature: &Signature) {
        self.relex(signature.return_args.clone());
        self.emit(TokenKind::NameFunction, signature.name.clone());
        self.relex(signature.params.clone());
        self.relex(signature.gap.clone());
        self.emit(TokenKind::Punctuation, signature.terminator.clone());
    }

    /// Tokenizes `range` with a fresh lexer on the same table and queues
    /// the result.
    fn relex(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        if self.depth >= MAX_RELEX_DEPTH {
            warn!(offset = self.base + range.start, "re-lex depth limit reached");
            self.emit(TokenKind::Text, range);
            return;
        }
        let nested = Lexer::nested(
            self.table,
            &self.source[range.clone()],
            self.base + range.start,
            self.depth + 1,
        );
        self.pending.extend(nested);
    }

    fn emit(&mut self, kind: TokenKind, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let offset = self.base + range.start;
        self.pending.push_back(Token::new(kind, &self.source[range], offset));
    }

    /// Consumes one character as [`TokenKind::Error`].
    fn emit_error_char(&mut self) {
        let start = self.position;
        let mut cursor = Cursor::at(self.source, start);
        cursor.advance();
        self.position = cursor.position();
        self.zero_width_steps = 0;
        self.emit(TokenKind::Error, start..self.position);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.position >= self.source.len() {
                return None;
            }
            self.step();
        }
    }
}

impl FusedIterator for Lexer<'_> {}
