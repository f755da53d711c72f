//! fsadot - Draw finite automata from plain-text arrow lists
//!
//! A library for parsing a line-oriented automaton description and
//! serializing it as a Graphviz DOT diagram.
//!
//! # Quick Start
//!
//! ```rust
//! use fsadot::render;
//!
//! let dot = render("0 1 a\n1 2 b\n\n2").unwrap();
//! assert!(dot.contains("state2[label=\"2\", shape=\"doublecircle\"];"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use fsadot::prelude::*;
//!
//! let parser = AutomatonParser::with_config(ParserConfig {
//!     drop_quoted_words: true,
//! });
//! let database = parser.parse("1 2 x \"y\n\n5").unwrap();
//!
//! // Warnings are data on the model
//! assert_eq!(database.diagnostics().len(), 3);
//! assert_eq!(database.starting_state(), 1);
//!
//! let renderer = DotRenderer::with_config(RenderConfig::new(Direction::TopDown));
//! let dot = renderer.render(&database).unwrap();
//! assert!(dot.contains("rankdir=\"TB\";"));
//! ```

pub mod automaton;
pub mod core;
pub mod graphviz;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::automaton::{AutomatonDatabase, AutomatonParser, Diagnostic, ParserConfig};
    pub use crate::core::{
        AutomatonError, Database, Direction, Parser, RenderConfig, Renderer, StateId, StateRole,
        Transition, TransitionLabel,
    };
    pub use crate::graphviz::{DotRenderer, GraphvizCommand};
}

/// Parse an automaton description with the default parser settings
///
/// # Example
/// ```rust
/// use fsadot::{parse, StateRole};
///
/// let db = parse("0 1 a\n1 2 b\n\n2").unwrap();
/// assert_eq!(db.starting_state(), 0);
/// assert_eq!(db.role(2), Some(StateRole::Final));
/// ```
pub fn parse(input: &str) -> Result<automaton::AutomatonDatabase, AutomatonError> {
    automaton::AutomatonParser::new().parse_lines(input.lines())
}

/// Serialize a parsed automaton as DOT with the default render settings
pub fn emit(database: &automaton::AutomatonDatabase) -> anyhow::Result<String> {
    use crate::core::Renderer as _;

    graphviz::DotRenderer::new().render(database)
}

/// Parse a description and serialize it as DOT
///
/// Diagnostics are dropped; use [`parse`] and [`emit`] to inspect them.
pub fn render(input: &str) -> anyhow::Result<String> {
    let database = parse(input)?;
    emit(&database)
}
