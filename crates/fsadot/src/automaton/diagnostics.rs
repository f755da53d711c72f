//! Recoverable problems found while parsing a description
//!
//! A diagnostic never aborts a run. The parser records them in order on the
//! finished model; callers decide how to report them.

use serde::Serialize;
use std::fmt;

use crate::core::StateId;

/// A warning attached to a parsed automaton
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Transition line with fewer than two tokens; the line was skipped
    ShortLine { line: usize },
    /// One of the first two tokens is not an integer; the line was skipped
    NonIntegerState { line: usize },
    /// Transition word containing a double quote
    QuotedWord {
        line: usize,
        word: String,
        /// Whether the word was left out of the label
        dropped: bool,
    },
    /// Final state that never appeared in a transition; it was ignored
    IsolatedFinalState { line: usize, state: StateId },
    /// The inferred starting state is not 0
    NonZeroStart { state: StateId },
}

impl Diagnostic {
    /// Input line the diagnostic refers to, if it refers to one
    pub fn line(&self) -> Option<usize> {
        match self {
            Diagnostic::ShortLine { line }
            | Diagnostic::NonIntegerState { line }
            | Diagnostic::QuotedWord { line, .. }
            | Diagnostic::IsolatedFinalState { line, .. } => Some(*line),
            Diagnostic::NonZeroStart { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ShortLine { line } => write!(
                f,
                "line {} is incorrect, less than 2 args; line skipped",
                line
            ),
            Diagnostic::NonIntegerState { line } => write!(
                f,
                "line {} is incorrect, first 2 args must be ints, then go transition words; line skipped",
                line
            ),
            Diagnostic::QuotedWord {
                line,
                word,
                dropped,
            } => write!(
                f,
                "line {} is incorrect, transition word {} contains double quotes; word {}",
                line,
                word,
                if *dropped { "skipped" } else { "kept" }
            ),
            Diagnostic::IsolatedFinalState { line, state } => write!(
                f,
                "line {}: isolated state {} declared final; state skipped",
                line, state
            ),
            Diagnostic::NonZeroStart { state } => write!(
                f,
                "starting state is not 0; assuming starting state {}",
                state
            ),
        }
    }
}
