//! Core type definitions for automaton processing
//!
//! This module contains the fundamental types used throughout fsadot:
//! state identifiers and roles, transition labels, layout direction and
//! the render configuration.

use serde::Serialize;
use std::fmt;

/// Identifier of an automaton state; identity is the integer value itself
pub type StateId = i64;

/// Symbol used for transitions written without any input words
pub const EPSILON: &str = "ε";

/// Role of a state in the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateRole {
    /// Non-accepting state
    #[default]
    Normal,
    /// Accepting state
    Final,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateRole::Normal => write!(f, "normal"),
            StateRole::Final => write!(f, "final"),
        }
    }
}

/// A state together with its role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StateNode {
    pub id: StateId,
    pub role: StateRole,
}

impl StateNode {
    pub fn new(id: StateId, role: StateRole) -> Self {
        Self { id, role }
    }
}

/// Label carried by a transition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "words")]
pub enum TransitionLabel {
    /// No input words were written for the transition
    Epsilon,
    /// The transition words, in input order
    Words(Vec<String>),
}

impl TransitionLabel {
    /// Build a label from transition words; an empty list is epsilon
    pub fn from_words(words: Vec<String>) -> Self {
        if words.is_empty() {
            TransitionLabel::Epsilon
        } else {
            TransitionLabel::Words(words)
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, TransitionLabel::Epsilon)
    }

    /// Text of the label, using `epsilon` for unlabeled transitions
    pub fn text_with(&self, epsilon: &str) -> String {
        match self {
            TransitionLabel::Epsilon => epsilon.to_string(),
            TransitionLabel::Words(words) => words.join(", "),
        }
    }
}

impl fmt::Display for TransitionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text_with(EPSILON))
    }
}

/// A directed, labeled arrow between two states
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Transition {
    /// Source state
    pub from: StateId,
    /// Destination state
    pub to: StateId,
    pub label: TransitionLabel,
}

impl Transition {
    /// Create an unlabeled (epsilon) transition
    pub fn epsilon(from: StateId, to: StateId) -> Self {
        Self {
            from,
            to,
            label: TransitionLabel::Epsilon,
        }
    }

    /// Create a transition carrying the given words
    pub fn with_words<I, S>(from: StateId, to: StateId, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from,
            to,
            label: TransitionLabel::from_words(words.into_iter().map(Into::into).collect()),
        }
    }
}

/// Rank direction of the generated graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Left to right (LR)
    #[default]
    LeftRight,
    /// Right to left (RL)
    RightLeft,
    /// Top to bottom (TB)
    TopDown,
    /// Bottom to top (BT)
    BottomUp,
}

impl Direction {
    /// Value of the `rankdir` graph attribute
    pub fn rankdir(&self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
            Direction::TopDown => "TB",
            Direction::BottomUp => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rankdir())
    }
}

/// Configuration for serializing an automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub direction: Direction,
    /// Text drawn on unlabeled transitions
    pub epsilon: String,
}

impl RenderConfig {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn with_epsilon(mut self, epsilon: impl Into<String>) -> Self {
        self.epsilon = epsilon.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            epsilon: EPSILON.to_string(),
        }
    }
}
