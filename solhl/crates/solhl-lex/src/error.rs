//! Rule table construction errors.

use thiserror::Error;

use crate::rules::StateId;

/// A defect in a rule table, detected when the table is built.
///
/// The built-in Solidity table is validated by the test suite; these errors
/// surface only for hand-assembled tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A mixin or push names a state that has no definition.
    #[error("state `{state}` is referenced by `{referenced_by}` but never defined")]
    UndefinedState {
        /// The missing state
        state: StateId,
        /// The state holding the reference
        referenced_by: StateId,
    },

    /// Mixins include each other in a cycle.
    #[error("mixin cycle through state `{state}`")]
    MixinCycle {
        /// A state on the cycle
        state: StateId,
    },

    /// A push targets a state that may only be mixed in.
    #[error("state `{referenced_by}` pushes mixin-only state `{target}`")]
    MixinOnlyTarget {
        /// The mixin-only state
        target: StateId,
        /// The state holding the push
        referenced_by: StateId,
    },

    /// The bottom state of the initial stack contains a pop.
    #[error("start state `{state}` contains a pop")]
    PopInStartState {
        /// The start state
        state: StateId,
    },

    /// An enterable state has no rule that always matches.
    #[error("state `{state}` has no catch-all rule")]
    NotTotal {
        /// The incomplete state
        state: StateId,
    },

    /// A zero-width rule would emit a token.
    #[error("state `{state}` has a zero-width rule that emits a token")]
    ZeroWidthEmit {
        /// The state holding the rule
        state: StateId,
    },

    /// A function-shape pattern without the signature action, or the other
    /// way round.
    #[error("state `{state}` pairs a function shape with the wrong action")]
    SignatureMismatch {
        /// The state holding the rule
        state: StateId,
    },

    /// The initial stack is empty.
    #[error("rule table has no start state")]
    NoStartState,
}

/// Result alias for table construction.
pub type TableResult<T> = std::result::Result<T, TableError>;
