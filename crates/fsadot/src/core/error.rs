//! Core error types for automaton processing
//!
//! Only conditions that abort a run live here. Recoverable problems found
//! while parsing are recorded as [`Diagnostic`](crate::automaton::Diagnostic)s
//! on the parsed model instead.

use thiserror::Error;

/// Fatal errors raised while building or rendering an automaton
#[derive(Error, Debug)]
pub enum AutomatonError {
    #[error("line {line} is incorrect: final state '{token}' is not an integer")]
    InvalidFinalState { line: usize, token: String },

    #[error("no states declared before the final-state section")]
    NoStates,

    #[error("Render error: {message}")]
    RenderFailed { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AutomatonError {
    /// Create a new invalid final state error
    pub fn invalid_final_state(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidFinalState {
            line,
            token: token.into(),
        }
    }

    /// Create a new render error
    pub fn render_failed(message: impl Into<String>) -> Self {
        Self::RenderFailed {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the input description itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidFinalState { .. } | Self::NoStates)
    }
}
