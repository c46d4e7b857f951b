//! In-memory graph storage implementation
//!
//! The store keeps three structures in step:
//! - nodes: NodeKey -> Node (insertion ordered)
//! - edges: EdgeKey -> Edge (insertion ordered, symmetric key)
//! - adjacency: NodeKey -> neighbor keys (insertion ordered)
//!
//! Every edge endpoint is present in `nodes`, and every edge appears in the
//! adjacency set of both endpoints (once for a self-loop).

use super::edge::Edge;
use super::entry::{EdgeEntry, NodeEntry};
use super::node::Node;
use super::property::{AttrValue, AttributeMap, WEIGHT};
use super::snapshot::GraphSnapshot;
use super::types::{EdgeKey, NodeKey};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeKey),

    #[error("Edge ({0}, {1}) not found")]
    EdgeNotFound(NodeKey, NodeKey),

    #[error("Invalid weight for edge ({u}, {v}): expected a number, found {found}")]
    InvalidWeight {
        u: NodeKey,
        v: NodeKey,
        found: &'static str,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory undirected graph with attribute maps
///
/// Snapshots (`all_nodes`, `all_edges`, `adjacent`, ...) follow insertion
/// order. A self-loop contributes 2 to the degree of its node.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node storage
    nodes: IndexMap<NodeKey, Node>,

    /// Edge storage keyed by the unordered endpoint pair
    edges: IndexMap<EdgeKey, Edge>,

    /// Neighbor sets for each node
    adjacency: HashMap<NodeKey, IndexSet<NodeKey>>,

    /// Graph-level metadata
    graph_attributes: AttributeMap,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Nodes
    // ============================================================

    /// Add a node with no attributes
    ///
    /// Adding an existing key leaves it untouched.
    pub fn add_node(&mut self, key: impl Into<NodeKey>) {
        self.add_node_with_attributes(key, AttributeMap::new());
    }

    /// Add a node, merging `attributes` into it if the key already exists
    ///
    /// New attribute names are added and existing ones are overwritten.
    pub fn add_node_with_attributes(&mut self, key: impl Into<NodeKey>, attributes: AttributeMap) {
        let key = key.into();
        if let Some(node) = self.nodes.get_mut(&key) {
            node.merge_attributes(attributes);
            return;
        }

        debug!("Adding node {}", key);
        self.adjacency.insert(key.clone(), IndexSet::new());
        self.nodes.insert(key.clone(), Node::new_with_attributes(key, attributes));
    }

    /// Add every element of `nodes` with [`add_node_with_attributes`](Self::add_node_with_attributes)
    ///
    /// Elements are keys or `(key, attributes)` pairs. Any sequence of scalars
    /// is handled uniformly, so `add_nodes_from("spam".chars())` adds the four
    /// nodes `s`, `p`, `a` and `m`.
    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator,
        I::Item: Into<NodeEntry>,
    {
        for entry in nodes {
            let NodeEntry { key, attributes } = entry.into();
            self.add_node_with_attributes(key, attributes);
        }
    }

    /// Remove a node and every edge incident to it
    pub fn remove_node(&mut self, key: impl Into<NodeKey>) -> GraphResult<Node> {
        let key = key.into();
        let node = self
            .nodes
            .shift_remove(&key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))?;

        let neighbors = self.adjacency.remove(&key).unwrap_or_default();
        if !neighbors.is_empty() {
            // One pass over the edge map instead of a shift per incident edge
            self.edges.retain(|_, edge| !edge.touches(&key));
        }
        for neighbor in neighbors.iter().filter(|n| *n != &key) {
            if let Some(adj) = self.adjacency.get_mut(neighbor) {
                adj.shift_remove(&key);
            }
        }

        debug!("Removed node {} and {} incident edges", key, neighbors.len());
        Ok(node)
    }

    /// Remove every listed node that exists; absent keys are skipped
    ///
    /// Returns the number of nodes removed.
    pub fn remove_nodes_from<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<NodeKey>,
    {
        let mut removed = 0;
        for key in keys {
            match self.remove_node(key) {
                Ok(_) => removed += 1,
                Err(e) => warn!("Skipping node removal: {}", e),
            }
        }
        removed
    }

    /// Get a node by key
    pub fn node(&self, key: impl Into<NodeKey>) -> Option<&Node> {
        self.nodes.get(&key.into())
    }

    /// Check if a node exists
    pub fn has_node(&self, key: impl Into<NodeKey>) -> bool {
        self.nodes.contains_key(&key.into())
    }

    /// Read one node attribute; `Ok(None)` if the node lacks it
    pub fn node_attribute(
        &self,
        key: impl Into<NodeKey>,
        name: &str,
    ) -> GraphResult<Option<&AttrValue>> {
        let key = key.into();
        let node = self.nodes.get(&key).ok_or(GraphError::NodeNotFound(key))?;
        Ok(node.attribute(name))
    }

    /// Write one node attribute, returning the previous value
    pub fn set_node_attribute(
        &mut self,
        key: impl Into<NodeKey>,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> GraphResult<Option<AttrValue>> {
        let key = key.into();
        let node = self
            .nodes
            .get_mut(&key)
            .ok_or(GraphError::NodeNotFound(key))?;
        Ok(node.set_attribute(name, value))
    }

    // ============================================================
    // Edges
    // ============================================================

    /// Add an edge with no attributes
    ///
    /// Creates `u` and/or `v` with empty attributes if they are missing.
    pub fn add_edge(&mut self, u: impl Into<NodeKey>, v: impl Into<NodeKey>) {
        self.add_edge_with_attributes(u, v, AttributeMap::new());
    }

    /// Add an edge, merging `attributes` into it if the pair already exists
    ///
    /// Missing endpoints are created with empty attributes first. `u == v`
    /// inserts a self-loop.
    pub fn add_edge_with_attributes(
        &mut self,
        u: impl Into<NodeKey>,
        v: impl Into<NodeKey>,
        attributes: AttributeMap,
    ) {
        let (u, v) = (u.into(), v.into());
        let edge_key = EdgeKey::new(&u, &v);
        if let Some(edge) = self.edges.get_mut(&edge_key) {
            edge.merge_attributes(attributes);
            return;
        }

        self.add_node(&u);
        self.add_node(&v);

        debug!("Adding edge {}", edge_key);
        if let Some(adj) = self.adjacency.get_mut(&u) {
            adj.insert(v.clone());
        }
        if let Some(adj) = self.adjacency.get_mut(&v) {
            adj.insert(u.clone());
        }
        self.edges
            .insert(edge_key, Edge::new_with_attributes(u, v, attributes));
    }

    /// Add every `(u, v)` or `(u, v, attributes)` element of `edges`
    pub fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<EdgeEntry>,
    {
        for entry in edges {
            let EdgeEntry { u, v, attributes } = entry.into();
            self.add_edge_with_attributes(u, v, attributes);
        }
    }

    /// Add `(u, v, weight)` triples as edges carrying a `weight` attribute
    ///
    /// Every weight must be an integer or a float. The whole batch is checked
    /// before anything is inserted, so a bad weight leaves the store untouched.
    pub fn add_weighted_edges_from<I, U, V, W>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (U, V, W)>,
        U: Into<NodeKey>,
        V: Into<NodeKey>,
        W: Into<AttrValue>,
    {
        let mut batch = Vec::new();
        for (u, v, weight) in edges {
            let (u, v, weight) = (u.into(), v.into(), weight.into());
            if !weight.is_numeric() {
                return Err(GraphError::InvalidWeight {
                    u,
                    v,
                    found: weight.type_name(),
                });
            }
            batch.push((u, v, weight));
        }

        for (u, v, weight) in batch {
            let mut attributes = AttributeMap::new();
            attributes.insert(WEIGHT.to_string(), weight);
            self.add_edge_with_attributes(u, v, attributes);
        }
        Ok(())
    }

    /// Remove the edge between `u` and `v`; both endpoints stay
    ///
    /// Keeps the order of the remaining edges, which costs O(E).
    pub fn remove_edge(&mut self, u: impl Into<NodeKey>, v: impl Into<NodeKey>) -> GraphResult<Edge> {
        let (u, v) = (u.into(), v.into());
        let edge = self
            .edges
            .shift_remove(&EdgeKey::new(&u, &v))
            .ok_or_else(|| GraphError::EdgeNotFound(u.clone(), v.clone()))?;

        if let Some(adj) = self.adjacency.get_mut(&u) {
            adj.shift_remove(&v);
        }
        if let Some(adj) = self.adjacency.get_mut(&v) {
            adj.shift_remove(&u);
        }

        debug!("Removed edge ({}, {})", u, v);
        Ok(edge)
    }

    /// Remove every listed edge that exists; absent pairs are skipped
    ///
    /// Returns the number of edges removed.
    pub fn remove_edges_from<I, U, V>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (U, V)>,
        U: Into<NodeKey>,
        V: Into<NodeKey>,
    {
        let mut removed = 0;
        for (u, v) in pairs {
            match self.remove_edge(u, v) {
                Ok(_) => removed += 1,
                Err(e) => warn!("Skipping edge removal: {}", e),
            }
        }
        removed
    }

    /// Get the edge between `u` and `v` (either order)
    pub fn edge(&self, u: impl Into<NodeKey>, v: impl Into<NodeKey>) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(u, v))
    }

    /// Check if an edge exists (either order)
    pub fn has_edge(&self, u: impl Into<NodeKey>, v: impl Into<NodeKey>) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// Read one edge attribute; `Ok(None)` if the edge lacks it
    pub fn edge_attribute(
        &self,
        u: impl Into<NodeKey>,
        v: impl Into<NodeKey>,
        name: &str,
    ) -> GraphResult<Option<&AttrValue>> {
        let (u, v) = (u.into(), v.into());
        let edge = self
            .edges
            .get(&EdgeKey::new(&u, &v))
            .ok_or(GraphError::EdgeNotFound(u, v))?;
        Ok(edge.attribute(name))
    }

    /// Write one attribute on an existing edge, returning the previous value
    pub fn set_edge_attribute(
        &mut self,
        u: impl Into<NodeKey>,
        v: impl Into<NodeKey>,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> GraphResult<Option<AttrValue>> {
        let (u, v) = (u.into(), v.into());
        let edge = self
            .edges
            .get_mut(&EdgeKey::new(&u, &v))
            .ok_or(GraphError::EdgeNotFound(u, v))?;
        Ok(edge.set_attribute(name, value))
    }

    /// Lazily yield `(u, v, value)` for every edge that has attribute `name`
    ///
    /// Edges without the attribute are skipped. Each call starts a fresh pass.
    pub fn edges_with_attribute<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a NodeKey, &'a NodeKey, &'a AttrValue)> + 'a {
        self.edges
            .values()
            .filter_map(move |edge| edge.attribute(name).map(|value| (&edge.u, &edge.v, value)))
    }

    // ============================================================
    // Structural queries
    // ============================================================

    /// Number of edges incident to `key`; a self-loop counts twice
    pub fn degree(&self, key: impl Into<NodeKey>) -> GraphResult<usize> {
        let key = key.into();
        let neighbors = self
            .adjacency
            .get(&key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))?;
        let self_loop = usize::from(neighbors.contains(&key));
        Ok(neighbors.len() + self_loop)
    }

    /// Degree of each requested key, in request order
    ///
    /// Fails on the first key that is not in the graph.
    pub fn degree_batch<I>(&self, keys: I) -> GraphResult<IndexMap<NodeKey, usize>>
    where
        I: IntoIterator,
        I::Item: Into<NodeKey>,
    {
        keys.into_iter()
            .map(|key| {
                let key = key.into();
                self.degree(&key).map(|d| (key, d))
            })
            .collect()
    }

    /// Degree of every node, in insertion order
    pub fn degrees(&self) -> Vec<(&NodeKey, usize)> {
        self.nodes
            .keys()
            .map(|key| {
                let neighbors = &self.adjacency[key];
                (key, neighbors.len() + usize::from(neighbors.contains(key)))
            })
            .collect()
    }

    /// Neighbors of `key` mapped to the attributes of the connecting edge
    pub fn adjacent(&self, key: impl Into<NodeKey>) -> GraphResult<IndexMap<&NodeKey, &AttributeMap>> {
        let key = key.into();
        let neighbors = self
            .adjacency
            .get(&key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))?;

        Ok(neighbors
            .iter()
            .filter_map(|n| {
                self.edges
                    .get(&EdgeKey::new(&key, n))
                    .map(|edge| (n, &edge.attributes))
            })
            .collect())
    }

    /// Neighbor keys of `key`, in insertion order
    pub fn neighbors(&self, key: impl Into<NodeKey>) -> GraphResult<Vec<&NodeKey>> {
        let key = key.into();
        self.adjacency
            .get(&key)
            .map(|neighbors| neighbors.iter().collect())
            .ok_or(GraphError::NodeNotFound(key))
    }

    // ============================================================
    // Graph attributes
    // ============================================================

    /// Set a graph-level attribute, returning the previous value
    pub fn set_graph_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.graph_attributes.insert(name.into(), value.into())
    }

    pub fn graph_attribute(&self, name: &str) -> Option<&AttrValue> {
        self.graph_attributes.get(name)
    }

    pub fn graph_attributes(&self) -> &AttributeMap {
        &self.graph_attributes
    }

    // ============================================================
    // Snapshots
    // ============================================================

    /// Keys of all nodes in insertion order
    pub fn all_nodes(&self) -> Vec<&NodeKey> {
        self.nodes.keys().collect()
    }

    /// Endpoint pairs of all edges in insertion order
    pub fn all_edges(&self) -> Vec<(&NodeKey, &NodeKey)> {
        self.edges.values().map(|e| (&e.u, &e.v)).collect()
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Read-only view for renderers and serializers
    pub fn snapshot(&self) -> GraphSnapshot<'_> {
        GraphSnapshot::new(self)
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.graph_attributes.is_empty()
    }

    /// Remove all nodes, edges and graph attributes
    pub fn clear(&mut self) {
        debug!(
            "Clearing graph ({} nodes, {} edges)",
            self.nodes.len(),
            self.edges.len()
        );
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.graph_attributes.clear();
    }
}

impl PartialEq for GraphStore {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
            && self.edges == other.edges
            && self.graph_attributes == other.graph_attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::property::attributes;

    #[test]
    fn test_add_and_get_node() {
        let mut store = GraphStore::new();
        store.add_node("node1");

        assert_eq!(store.node_count(), 1);
        let node = store.node("node1").unwrap();
        assert_eq!(node.key, NodeKey::from("node1"));
        assert_eq!(node.attribute_count(), 0);
    }

    #[test]
    fn test_add_node_merges_attributes() {
        let mut store = GraphStore::new();
        store.add_node_with_attributes("node1", attributes([("nom", AttrValue::from("Mourad")), ("age", AttrValue::from(200))]));
        store.add_node_with_attributes("node1", attributes([("age", AttrValue::from(201)), ("annee", AttrValue::from("MA2"))]));

        assert_eq!(store.node_count(), 1);
        let node = store.node("node1").unwrap();
        assert_eq!(node.attributes, attributes([
            ("nom", AttrValue::from("Mourad")),
            ("age", AttrValue::from(201)),
            ("annee", AttrValue::from("MA2")),
        ]));
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut store = GraphStore::new();
        store.add_edge("p", "q");

        assert!(store.has_node("p"));
        assert!(store.has_node("q"));
        assert!(store.has_edge("q", "p"));
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_edge_merge_is_symmetric() {
        let mut store = GraphStore::new();
        store.add_edge_with_attributes("a", "b", attributes([("color", "red")]));
        store.add_edge_with_attributes("b", "a", attributes([("size", 3)]));

        assert_eq!(store.edge_count(), 1);
        let edge = store.edge("a", "b").unwrap();
        assert_eq!(edge.attributes.len(), 2);
        assert_eq!(store.all_edges(), vec![(&NodeKey::from("a"), &NodeKey::from("b"))]);
    }

    #[test]
    fn test_degree_and_adjacency() {
        let mut store = GraphStore::new();
        store.add_edge("node1", "node2");
        store.add_edge_with_attributes("node1", "node3", attributes([("attribut1", "gold")]));

        assert_eq!(store.degree("node1").unwrap(), 2);
        assert_eq!(store.degree("node2").unwrap(), 1);

        let adj = store.adjacent("node1").unwrap();
        let keys: Vec<String> = adj.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["node2", "node3"]);
        assert!(adj[&NodeKey::from("node2")].is_empty());
        assert_eq!(adj[&NodeKey::from("node3")].get("attribut1").unwrap().as_string(), Some("gold"));
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let mut store = GraphStore::new();
        store.add_edge("x", "x");
        store.add_edge("x", "y");

        assert_eq!(store.degree("x").unwrap(), 3);
        assert_eq!(store.neighbors("x").unwrap().len(), 2);

        store.remove_node("x").unwrap();
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.degree("y").unwrap(), 0);
    }

    #[test]
    fn test_degree_of_missing_node() {
        let store = GraphStore::new();
        assert_eq!(store.degree("ghost"), Err(GraphError::NodeNotFound("ghost".into())));
        assert!(store.adjacent("ghost").is_err());
        assert!(store.neighbors("ghost").is_err());
    }

    #[test]
    fn test_degree_batch() {
        let mut store = GraphStore::new();
        store.add_edge("node1", "node2");
        store.add_edge("node1", "node3");

        let degrees = store.degree_batch(["node1", "node2"]).unwrap();
        assert_eq!(degrees.len(), 2);
        assert_eq!(degrees[&NodeKey::from("node1")], 2);
        assert_eq!(degrees[&NodeKey::from("node2")], 1);

        let result = store.degree_batch(["node1", "missing"]);
        assert_eq!(result, Err(GraphError::NodeNotFound("missing".into())));
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut store = GraphStore::new();
        store.add_edges_from([("node4", "node5"), ("node5", "node6"), ("node4", "node6")]);

        store.remove_node("node5").unwrap();
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert!(store.edges().all(|e| !e.touches(&NodeKey::from("node5"))));
        assert_eq!(store.neighbors("node4").unwrap(), vec![&NodeKey::from("node6")]);
    }

    #[test]
    fn test_remove_missing_node() {
        let mut store = GraphStore::new();
        let result = store.remove_node("nope");
        assert_eq!(result.unwrap_err(), GraphError::NodeNotFound("nope".into()));
    }

    #[test]
    fn test_remove_edge_keeps_endpoints() {
        let mut store = GraphStore::new();
        store.add_edge("node3", "node6");

        let removed = store.remove_edge("node6", "node3").unwrap();
        assert_eq!(removed.u, NodeKey::from("node3"));
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.degree("node3").unwrap(), 0);

        assert_eq!(
            store.remove_edge("node3", "node6").unwrap_err(),
            GraphError::EdgeNotFound("node3".into(), "node6".into())
        );
    }

    #[test]
    fn test_bulk_removal_skips_missing() {
        let mut store = GraphStore::new();
        store.add_nodes_from(["a", "b", "c"]);
        store.add_edge("a", "b");

        assert_eq!(store.remove_edges_from([("a", "b"), ("b", "c")]), 1);
        assert_eq!(store.remove_nodes_from(["a", "z"]), 1);
        assert_eq!(store.all_nodes(), vec![&NodeKey::from("b"), &NodeKey::from("c")]);
    }

    #[test]
    fn test_edge_attribute_accessors() {
        let mut store = GraphStore::new();
        store.add_edge("node1", "node2");

        let previous = store.set_edge_attribute("node2", "node1", "propiete_du_edge", 42).unwrap();
        assert_eq!(previous, None);
        assert_eq!(
            store.edge_attribute("node1", "node2", "propiete_du_edge").unwrap(),
            Some(&AttrValue::Integer(42))
        );
        assert_eq!(store.edge_attribute("node1", "node2", "other").unwrap(), None);

        assert!(store.edge_attribute("node1", "node9", "x").is_err());
        assert!(store.set_edge_attribute("node1", "node9", "x", 1).is_err());
        assert!(!store.has_node("node9"));
    }

    #[test]
    fn test_node_attribute_accessors() {
        let mut store = GraphStore::new();
        store.add_node("node2");
        store.set_node_attribute("node2", "est_homosexuel", true).unwrap();

        assert_eq!(
            store.node_attribute("node2", "est_homosexuel").unwrap(),
            Some(&AttrValue::Boolean(true))
        );
        assert!(store.set_node_attribute("node7", "x", 1).is_err());
    }

    #[test]
    fn test_weighted_edges() {
        let mut store = GraphStore::new();
        store
            .add_weighted_edges_from([("node1", "node3", AttrValue::from(666)), ("node3", "s", AttrValue::from(9999.5))])
            .unwrap();

        assert_eq!(store.edge("node1", "node3").unwrap().weight(), Some(666.0));
        assert_eq!(store.edge_attribute("s", "node3", WEIGHT).unwrap(), Some(&AttrValue::Float(9999.5)));
    }

    #[test]
    fn test_weighted_edges_are_atomic() {
        let mut store = GraphStore::new();
        let result = store.add_weighted_edges_from([
            ("a", "b", AttrValue::from(1)),
            ("b", "c", AttrValue::from("heavy")),
        ]);

        assert_eq!(
            result,
            Err(GraphError::InvalidWeight { u: "b".into(), v: "c".into(), found: "String" })
        );
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_edges_with_attribute() {
        let mut store = GraphStore::new();
        store.add_edge("node1", "node2");
        store.add_weighted_edges_from([("node1", "node3", 666), ("node3", "s", 9999)]).unwrap();

        let weighted: Vec<_> = store.edges_with_attribute(WEIGHT).collect();
        assert_eq!(weighted.len(), 2);
        assert_eq!(weighted[0].2, &AttrValue::Integer(666));

        // A second pass starts from the beginning
        assert_eq!(store.edges_with_attribute(WEIGHT).count(), 2);
        assert_eq!(store.edges_with_attribute("missing").count(), 0);
    }

    #[test]
    fn test_graph_attributes() {
        let mut store = GraphStore::new();
        assert_eq!(store.graph_attribute("name"), None);

        store.set_graph_attribute("name", "Carte du bourg-palette");
        assert_eq!(
            store.graph_attribute("name").unwrap().as_string(),
            Some("Carte du bourg-palette")
        );
    }

    #[test]
    fn test_clear() {
        let mut store = GraphStore::new();
        store.add_edge("a", "b");
        store.set_graph_attribute("name", "g");

        store.clear();
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert!(store.is_empty());
        assert_eq!(store, GraphStore::new());

        store.clear();
        assert_eq!(store, GraphStore::new());
    }

    #[test]
    fn test_add_nodes_from_bare_keys() {
        let mut store = GraphStore::new();
        store.add_nodes_from(["a", "b", "c"]);

        assert_eq!(
            store.all_nodes(),
            vec![&NodeKey::from("a"), &NodeKey::from("b"), &NodeKey::from("c")]
        );
        for key in ["a", "b", "c"] {
            assert!(store.node(key).unwrap().attributes.is_empty());
        }
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_add_nodes_from_pairs_merge() {
        let mut store = GraphStore::new();
        store.add_nodes_from([("a", attributes([("x", 1)])), ("a", attributes([("y", 2)]))]);

        assert_eq!(store.node_count(), 1);
        assert_eq!(
            store.node("a").unwrap().attributes,
            attributes([("x", 1), ("y", 2)])
        );

        store.add_nodes_from([("a", attributes([("x", 5)]))]);
        assert_eq!(store.node_attribute("a", "x").unwrap(), Some(&AttrValue::Integer(5)));
        assert_eq!(store.node_attribute("a", "y").unwrap(), Some(&AttrValue::Integer(2)));
    }

    #[test]
    fn test_remove_node_keeps_edge_order() {
        let mut store = GraphStore::new();
        store.add_edges_from([("a", "b"), ("x", "x"), ("c", "d"), ("b", "x"), ("e", "f")]);

        store.remove_node("x").unwrap();
        let edges: Vec<String> = store
            .all_edges()
            .iter()
            .map(|(u, v)| format!("{}-{}", u, v))
            .collect();
        assert_eq!(edges, vec!["a-b", "c-d", "e-f"]);
        assert_eq!(store.neighbors("b").unwrap(), vec![&NodeKey::from("a")]);
    }

    #[test]
    fn test_insertion_order_snapshots() {
        let mut store = GraphStore::new();
        store.add_nodes_from(["c", "a", "b"]);
        store.add_edges_from([("b", "a"), ("c", "b")]);

        let nodes: Vec<String> = store.all_nodes().iter().map(|k| k.to_string()).collect();
        assert_eq!(nodes, vec!["c", "a", "b"]);

        let edges: Vec<String> = store
            .all_edges()
            .iter()
            .map(|(u, v)| format!("{}-{}", u, v))
            .collect();
        assert_eq!(edges, vec!["b-a", "c-b"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut g1 = GraphStore::new();
        g1.add_edge("a", "b");
        g1.add_node("c");

        let mut g2 = GraphStore::new();
        g2.add_node("c");
        g2.add_edge("b", "a");

        assert_eq!(g1, g2);
    }
}
