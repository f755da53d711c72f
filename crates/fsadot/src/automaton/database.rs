//! Automaton model produced by the description parser
//!
//! Stores the normal/final partition, the ordered transition list, the
//! starting state and the diagnostics gathered while parsing.

use serde::Serialize;
use std::collections::BTreeSet;

use super::Diagnostic;
use crate::core::{Database, StateId, StateNode, StateRole, Transition};

/// Parsed automaton
///
/// Built once by [`AutomatonParser`](super::AutomatonParser); only read
/// accessors are public. State sets iterate in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonDatabase {
    normal_states: BTreeSet<StateId>,
    final_states: BTreeSet<StateId>,
    transitions: Vec<Transition>,
    starting_state: StateId,
    diagnostics: Vec<Diagnostic>,
}

impl AutomatonDatabase {
    pub(crate) fn from_parts(
        normal_states: BTreeSet<StateId>,
        final_states: BTreeSet<StateId>,
        transitions: Vec<Transition>,
        starting_state: StateId,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        debug_assert!(normal_states.is_disjoint(&final_states));
        Self {
            normal_states,
            final_states,
            transitions,
            starting_state,
            diagnostics,
        }
    }

    /// Non-accepting states, ascending
    pub fn normal_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.normal_states.iter().copied()
    }

    /// Accepting states, ascending
    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.final_states.iter().copied()
    }

    /// Transitions in input order
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The automaton's entry state
    pub fn starting_state(&self) -> StateId {
        self.starting_state
    }

    /// Warnings recorded while parsing, in input order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Role of a state, or None if it never appeared in a transition
    pub fn role(&self, id: StateId) -> Option<StateRole> {
        if self.normal_states.contains(&id) {
            Some(StateRole::Normal)
        } else if self.final_states.contains(&id) {
            Some(StateRole::Final)
        } else {
            None
        }
    }

    pub fn contains_state(&self, id: StateId) -> bool {
        self.role(id).is_some()
    }

    pub fn state_count(&self) -> usize {
        self.normal_states.len() + self.final_states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl Database for AutomatonDatabase {
    type Node = StateNode;
    type Edge = Transition;
    type NodeId = StateId;

    fn get_node(&self, id: StateId) -> Option<StateNode> {
        self.role(id).map(|role| StateNode::new(id, role))
    }

    fn nodes(&self) -> impl Iterator<Item = StateNode> {
        self.normal_states()
            .map(|id| StateNode::new(id, StateRole::Normal))
            .chain(
                self.final_states()
                    .map(|id| StateNode::new(id, StateRole::Final)),
            )
    }

    fn edges(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    fn node_count(&self) -> usize {
        self.state_count()
    }

    fn edge_count(&self) -> usize {
        self.transition_count()
    }
}
