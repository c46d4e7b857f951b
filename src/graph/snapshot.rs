//! Read-only view over a graph store
//!
//! Renderers and serializers receive a `GraphSnapshot` rather than the store
//! itself, so they can read nodes, edges and attributes but never mutate them.

use super::edge::Edge;
use super::node::Node;
use super::property::AttributeMap;
use super::store::GraphStore;

/// Borrowed, immutable view of the current graph state
#[derive(Debug, Clone, Copy)]
pub struct GraphSnapshot<'a> {
    store: &'a GraphStore,
}

impl<'a> GraphSnapshot<'a> {
    pub(crate) fn new(store: &'a GraphStore) -> Self {
        GraphSnapshot { store }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &'a Node> + 'a {
        self.store.nodes()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &'a Edge> + 'a {
        self.store.edges()
    }

    pub fn graph_attributes(&self) -> &'a AttributeMap {
        self.store.graph_attributes()
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }
}
