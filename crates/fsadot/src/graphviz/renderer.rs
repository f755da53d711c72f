//! DOT renderer for parsed automata
//!
//! Produces a Graphviz `digraph` with one circle per normal state, one
//! double circle per final state, one edge per transition and an invisible
//! `nowhere` node pointing at the starting state.

use anyhow::Result;
use std::fmt::Write;
use tracing::{debug, span, trace, Level};

use super::{escape_label, node_id, ENTRY_NODE};
use crate::automaton::AutomatonDatabase;
use crate::core::{Database, RenderConfig, Renderer, StateRole};

/// Graphviz DOT renderer
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    config: RenderConfig,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn shape(role: StateRole) -> &'static str {
        match role {
            StateRole::Normal => "circle",
            StateRole::Final => "doublecircle",
        }
    }
}

impl Renderer<AutomatonDatabase> for DotRenderer {
    type Output = String;

    fn render(&self, database: &AutomatonDatabase) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render_dot",
            states = database.node_count(),
            transitions = database.edge_count()
        );
        let _enter = render_span.enter();

        let mut out = String::new();
        writeln!(out, "digraph")?;
        writeln!(out, "{{")?;
        writeln!(out, "rankdir=\"{}\";", self.config.direction.rankdir())?;
        writeln!(out, "{}[label=\"\", shape=\"none\"];", ENTRY_NODE)?;

        for node in database.nodes() {
            trace!(state = node.id, role = %node.role, "Emitting state");
            writeln!(
                out,
                "{}[label=\"{}\", shape=\"{}\"];",
                node_id(node.id),
                node.id,
                Self::shape(node.role)
            )?;
        }

        for transition in database.edges() {
            let label = transition.label.text_with(&self.config.epsilon);
            writeln!(
                out,
                "{}->{}[label=\"{}\"];",
                node_id(transition.from),
                node_id(transition.to),
                escape_label(&label)
            )?;
        }

        writeln!(
            out,
            "{}->{};",
            ENTRY_NODE,
            node_id(database.starting_state())
        )?;
        writeln!(out, "}}")?;

        debug!(bytes = out.len(), "Rendered DOT description");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "dot"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "dot"
    }
}
