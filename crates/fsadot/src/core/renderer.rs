//! Core renderer trait for graph descriptions
//!
//! This trait defines the interface for serializing a parsed model into
//! a textual graph description language.

use anyhow::Result;

use super::Database;

/// Core trait for model renderers
///
/// # Example
/// ```
/// use fsadot::core::{Parser, Renderer};
/// use fsadot::automaton::AutomatonParser;
/// use fsadot::graphviz::DotRenderer;
///
/// let db = AutomatonParser::new().parse("0 1\n\n1").unwrap();
/// let dot = DotRenderer::new().render(&db).unwrap();
/// assert!(dot.starts_with("digraph"));
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
