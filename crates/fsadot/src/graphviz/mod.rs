//! Graphviz output
//!
//! [`DotRenderer`] serializes an automaton into the DOT language and
//! [`GraphvizCommand`] hands that text to the external `dot` program.

mod command;
mod renderer;

pub use command::{GraphvizCommand, DEFAULT_FORMAT, DEFAULT_PROGRAM};
pub use renderer::DotRenderer;

use crate::core::StateId;

/// Name of the invisible node whose edge marks the starting state
pub const ENTRY_NODE: &str = "nowhere";

const STATE_PREFIX: &str = "state";

/// DOT identifier of a state node
///
/// Non-negative ids give bare identifiers such as `state3`; negative ids are
/// quoted (`"state-3"`). Neither form can equal [`ENTRY_NODE`].
pub fn node_id(id: StateId) -> String {
    if id < 0 {
        format!("\"{}{}\"", STATE_PREFIX, id)
    } else {
        format!("{}{}", STATE_PREFIX, id)
    }
}

/// Escape text for use inside a double-quoted DOT string
pub fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}
