//! Core parser trait for automaton descriptions
//!
//! This trait defines the interface for turning description text into a
//! finished [`Database`].

use anyhow::Result;

use super::Database;

/// Core trait for description parsers
///
/// # Example
/// ```
/// use fsadot::core::{Database, Parser};
/// use fsadot::automaton::AutomatonParser;
///
/// let parser = AutomatonParser::new();
/// let db = parser.parse("0 1 a\n\n1").unwrap();
/// assert_eq!(db.node_count(), 2);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse a complete description into a new database
    fn parse(&self, input: &str) -> Result<D>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;
}
