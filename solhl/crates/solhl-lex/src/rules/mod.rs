//! Rule tables.
//!
//! A rule table is a set of named states, each an ordered list of rules.
//! A rule pairs an anchored [`Pattern`] with an [`Action`] (which tokens to
//! emit) and a [`Transition`] (what to do with the state stack).
//!
//! States are written with *mixins*: an entry that splices another state's
//! rules in at that position. [`TableBuilder::build`] flattens every mixin
//! once, so the lexer only ever walks plain rule lists, and rejects tables
//! the lexer could get stuck on.
//!
//! # Example
//!
//! ```
//! use solhl_lex::lexer::identifier;
//! use solhl_lex::rules::{StateId, TableBuilder};
//! use solhl_lex::TokenKind;
//!
//! let mut builder = TableBuilder::new([StateId::Root]);
//! builder
//!     .state(StateId::Root)
//!     .emit(identifier::identifier, TokenKind::Name)
//!     .catch_all();
//! let table = builder.build().unwrap();
//! assert_eq!(table.rules(StateId::Root).len(), 2);
//! ```

pub mod solidity;

use std::fmt;

use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{TableError, TableResult};
use crate::lexer::signature::{match_function, GapIndex, Signature, Terminator};
use crate::token::TokenKind;

/// An anchored matcher: advances the cursor over what it accepts.
pub type ScanFn = fn(&mut Cursor<'_>) -> bool;

/// Names of the lexer states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateId {
    /// Top level of a source file
    Root,
    /// Inside a top-level statement, up to its `;`
    Statement,
    /// Inside a function body
    Function,
    /// Expression-level rules shared by statements and bodies
    Statements,
    /// After `case`, up to its `:`
    Case,
    /// Newlines, line comments and inline whitespace
    Whitespace,
    /// Spaces, line continuations and block comments
    InlineWhitespace,
    /// Whitespace that returns to [`StateId::ExprBol`] after a newline
    ExprWhitespace,
    /// Beginning of a line where a label may appear
    Bol,
    /// Beginning of a line inside an expression
    ExprBol,
    /// A `#` preprocessor line
    Macro,
    /// An excluded `#if 0` block
    If0,
    /// Inside a `"` string
    StringDouble,
    /// Inside a `'` string
    StringSingle,
    /// Rules shared by both string states
    StringCommon,
}

impl StateId {
    /// Number of states.
    pub const COUNT: usize = 15;

    /// Every state, in declaration order.
    pub const ALL: [StateId; StateId::COUNT] = [
        StateId::Root,
        StateId::Statement,
        StateId::Function,
        StateId::Statements,
        StateId::Case,
        StateId::Whitespace,
        StateId::InlineWhitespace,
        StateId::ExprWhitespace,
        StateId::Bol,
        StateId::ExprBol,
        StateId::Macro,
        StateId::If0,
        StateId::StringDouble,
        StateId::StringSingle,
        StateId::StringCommon,
    ];

    /// Snake-case name of the state.
    pub const fn name(self) -> &'static str {
        match self {
            StateId::Root => "root",
            StateId::Statement => "statement",
            StateId::Function => "function",
            StateId::Statements => "statements",
            StateId::Case => "case",
            StateId::Whitespace => "whitespace",
            StateId::InlineWhitespace => "inline_whitespace",
            StateId::ExprWhitespace => "expr_whitespace",
            StateId::Bol => "bol",
            StateId::ExprBol => "expr_bol",
            StateId::Macro => "macro",
            StateId::If0 => "if_0",
            StateId::StringDouble => "string_double",
            StateId::StringSingle => "string_single",
            StateId::StringCommon => "string_common",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a rule matches.
#[derive(Clone, Copy, Debug)]
pub enum Pattern {
    /// Always matches, consuming nothing.
    Empty,
    /// Any single character.
    AnyChar,
    /// The rest of the line including its newline, or the rest of the input.
    Line,
    /// A matcher function; a zero-length success counts as no match.
    Scan(ScanFn),
    /// A function shape ending in the given terminator.
    Function(Terminator),
}

/// Result of a successful pattern match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Match {
    /// A plain match of the given byte length.
    Plain(usize),
    /// A function shape.
    Signature(Signature),
}

impl Match {
    /// Matched length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Match::Plain(len) => *len,
            Match::Signature(sig) => sig.len(),
        }
    }

    /// Returns true for a zero-width match.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Pattern {
    /// Returns true if the pattern matches wherever input remains.
    pub const fn is_total(&self) -> bool {
        matches!(self, Pattern::Empty | Pattern::AnyChar | Pattern::Line)
    }

    /// Tries the pattern anchored at `cursor`; `gaps` indexes the cursor's
    /// source for function shapes.
    pub fn matches(&self, cursor: Cursor<'_>, gaps: &mut GapIndex) -> Option<Match> {
        let mut ahead = cursor;
        match self {
            Pattern::Empty => return Some(Match::Plain(0)),
            Pattern::AnyChar => {
                ahead.advance();
            },
            Pattern::Line => ahead.eat_line(),
            Pattern::Scan(scan) => {
                if !scan(&mut ahead) {
                    return None;
                }
            },
            Pattern::Function(terminator) => {
                return match_function(cursor, *terminator, gaps).map(Match::Signature);
            },
        }
        let len = ahead.position() - cursor.position();
        (len > 0).then_some(Match::Plain(len))
    }
}

/// Tokens a rule emits for its match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// The whole match as one token of this kind.
    Emit(TokenKind),
    /// The whole match, classified as an identifier.
    Classify,
    /// A function shape: its parts re-lexed, its name as a function name.
    Signature,
    /// No token.
    Nothing,
}

/// Effect of a rule on the state stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Leave the stack as is.
    Stay,
    /// Enter a state.
    Push(StateId),
    /// Return to the previous state.
    Pop,
}

/// A single rule.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// What the rule matches
    pub pattern: Pattern,
    /// Tokens emitted for the match
    pub action: Action,
    /// Effect on the state stack
    pub transition: Transition,
}

impl Rule {
    /// Creates a rule.
    pub const fn new(pattern: Pattern, action: Action, transition: Transition) -> Self {
        Self {
            pattern,
            action,
            transition,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Entry {
    Rule(Rule),
    Mixin(StateId),
}

/// Definition of one state, as written.
#[derive(Clone, Debug, Default)]
pub struct StateDef {
    entries: Vec<Entry>,
    mixin_only: bool,
}

impl StateDef {
    /// Appends a rule.
    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        self.entries.push(Entry::Rule(rule));
        self
    }

    /// Splices in the rules of `state` at this position.
    pub fn mixin(&mut self, state: StateId) -> &mut Self {
        self.entries.push(Entry::Mixin(state));
        self
    }

    /// Emits the match as `kind`.
    pub fn emit(&mut self, scan: ScanFn, kind: TokenKind) -> &mut Self {
        self.rule(Rule::new(Pattern::Scan(scan), Action::Emit(kind), Transition::Stay))
    }

    /// Emits the match as `kind` and enters `state`.
    pub fn emit_push(&mut self, scan: ScanFn, kind: TokenKind, state: StateId) -> &mut Self {
        self.rule(Rule::new(Pattern::Scan(scan), Action::Emit(kind), Transition::Push(state)))
    }

    /// Emits the match as `kind` and leaves the current state.
    pub fn emit_pop(&mut self, scan: ScanFn, kind: TokenKind) -> &mut Self {
        self.rule(Rule::new(Pattern::Scan(scan), Action::Emit(kind), Transition::Pop))
    }

    /// Emits the match with its identifier classification.
    pub fn classify(&mut self, scan: ScanFn) -> &mut Self {
        self.rule(Rule::new(Pattern::Scan(scan), Action::Classify, Transition::Stay))
    }

    /// Matches a function shape and enters `state`.
    pub fn signature(&mut self, terminator: Terminator, state: StateId) -> &mut Self {
        self.rule(Rule::new(
            Pattern::Function(terminator),
            Action::Signature,
            Transition::Push(state),
        ))
    }

    /// Enters `state` without consuming input.
    pub fn push_empty(&mut self, state: StateId) -> &mut Self {
        self.rule(Rule::new(Pattern::Empty, Action::Nothing, Transition::Push(state)))
    }

    /// Leaves the current state without consuming input.
    pub fn pop_empty(&mut self) -> &mut Self {
        self.rule(Rule::new(Pattern::Empty, Action::Nothing, Transition::Pop))
    }

    /// Emits the rest of the line as `kind`.
    pub fn rest_of_line(&mut self, kind: TokenKind) -> &mut Self {
        self.rule(Rule::new(Pattern::Line, Action::Emit(kind), Transition::Stay))
    }

    /// Emits any single character as [`TokenKind::Error`].
    pub fn catch_all(&mut self) -> &mut Self {
        self.rule(Rule::new(Pattern::AnyChar, Action::Emit(TokenKind::Error), Transition::Stay))
    }
}

/// Collects state definitions and builds a [`RuleTable`].
#[derive(Debug)]
pub struct TableBuilder {
    defs: Vec<Option<StateDef>>,
    start: Vec<StateId>,
}

impl TableBuilder {
    /// Creates a builder whose lexers start with `start` on the stack,
    /// bottom first.
    pub fn new(start: impl IntoIterator<Item = StateId>) -> Self {
        Self {
            defs: vec![None; StateId::COUNT],
            start: start.into_iter().collect(),
        }
    }

    /// Defines an enterable state, or returns its definition so far.
    pub fn state(&mut self, id: StateId) -> &mut StateDef {
        self.defs[id.index()].get_or_insert_with(StateDef::default)
    }

    /// Defines a state that may only be mixed into others.
    pub fn mixin_only(&mut self, id: StateId) -> &mut StateDef {
        let def = self.state(id);
        def.mixin_only = true;
        def
    }

    /// Flattens mixins and validates the table.
    pub fn build(self) -> TableResult<RuleTable> {
        let bottom = *self.start.first().ok_or(TableError::NoStartState)?;

        let mut states = vec![Vec::new(); StateId::COUNT];
        for id in StateId::ALL {
            let Some(def) = &self.defs[id.index()] else {
                continue;
            };
            let mut rules = Vec::new();
            self.flatten(id, &mut Vec::new(), &mut rules)?;
            self.check_rules(id, &rules)?;
            if !def.mixin_only && !rules.iter().any(|r| r.pattern.is_total()) {
                return Err(TableError::NotTotal { state: id });
            }
            states[id.index()] = rules;
        }

        for &id in &self.start {
            self.check_target(id, bottom)?;
        }
        if states[bottom.index()].iter().any(|r| r.transition == Transition::Pop) {
            return Err(TableError::PopInStartState { state: bottom });
        }

        debug!(
            states = self.defs.iter().filter(|d| d.is_some()).count(),
            rules = states.iter().map(Vec::len).sum::<usize>(),
            "rule table built"
        );
        Ok(RuleTable {
            states,
            start: self.start,
        })
    }

    fn flatten(
        &self,
        id: StateId,
        path: &mut Vec<StateId>,
        out: &mut Vec<Rule>,
    ) -> TableResult<()> {
        if path.contains(&id) {
            return Err(TableError::MixinCycle { state: id });
        }
        let def = self.defs[id.index()].as_ref().ok_or(TableError::UndefinedState {
            state: id,
            referenced_by: path.last().copied().unwrap_or(id),
        })?;

        path.push(id);
        for entry in &def.entries {
            match *entry {
                Entry::Rule(rule) => out.push(rule),
                Entry::Mixin(mixin) => self.flatten(mixin, path, out)?,
            }
        }
        path.pop();
        Ok(())
    }

    fn check_rules(&self, id: StateId, rules: &[Rule]) -> TableResult<()> {
        for rule in rules {
            if matches!(rule.pattern, Pattern::Empty) && rule.action != Action::Nothing {
                return Err(TableError::ZeroWidthEmit { state: id });
            }
            if matches!(rule.pattern, Pattern::Function(_)) != (rule.action == Action::Signature) {
                return Err(TableError::SignatureMismatch { state: id });
            }
            if let Transition::Push(target) = rule.transition {
                self.check_target(target, id)?;
            }
        }
        Ok(())
    }

    fn check_target(&self, target: StateId, referenced_by: StateId) -> TableResult<()> {
        match &self.defs[target.index()] {
            None => Err(TableError::UndefinedState {
                state: target,
                referenced_by,
            }),
            Some(def) if def.mixin_only => Err(TableError::MixinOnlyTarget {
                target,
                referenced_by,
            }),
            Some(_) => Ok(()),
        }
    }
}

/// A validated rule table with every mixin flattened.
#[derive(Debug)]
pub struct RuleTable {
    states: Vec<Vec<Rule>>,
    start: Vec<StateId>,
}

impl RuleTable {
    /// Flattened rules of `state`, in match order.
    ///
    /// Empty for states that are undefined or mixin-only.
    #[inline]
    pub fn rules(&self, state: StateId) -> &[Rule] {
        &self.states[state.index()]
    }

    /// Initial state stack, bottom first.
    #[inline]
    pub fn start(&self) -> &[StateId] {
        &self.start
    }
}
