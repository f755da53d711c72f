//! Core database trait for parsed automaton data
//!
//! This trait defines the read side of a parsed model. Models are filled
//! in by their parser and handed to renderers as immutable values.

/// Core trait for parsed graph models
///
/// The associated types let each model define its own node and edge
/// structures with model-specific metadata.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The edge data type for this database
    type Edge: Clone + Send + Sync;

    /// Identifier used to look nodes up
    type NodeId: Copy + Send + Sync;

    /// Get a node by ID
    fn get_node(&self, id: Self::NodeId) -> Option<Self::Node>;

    /// Iterate over all nodes
    fn nodes(&self) -> impl Iterator<Item = Self::Node>;

    /// Iterate over all edges
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;
}
