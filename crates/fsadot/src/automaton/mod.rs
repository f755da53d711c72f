//! Automaton description plugin
//!
//! Parses the plain-text arrow list format into an [`AutomatonDatabase`].
//!
//! Syntax example:
//! ```text
//! 0 1 a
//! 1 2 b
//!
//! 2
//! ```

mod database;
mod diagnostics;
mod parser;

pub use database::AutomatonDatabase;
pub use diagnostics::Diagnostic;
pub use parser::{AutomatonParser, ParserConfig};
