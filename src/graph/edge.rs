//! Edge implementation for the attribute graph
//!
//! Edges are undirected: `u` and `v` only record the order in which the
//! endpoints were first given.

use super::property::{AttrValue, AttributeMap, WEIGHT};
use super::types::{EdgeKey, NodeKey};
use serde::{Deserialize, Serialize};

/// An undirected edge in the graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint as given at creation
    pub u: NodeKey,

    /// Second endpoint as given at creation
    pub v: NodeKey,

    /// Attributes associated with this edge
    pub attributes: AttributeMap,
}

impl Edge {
    pub fn new(u: impl Into<NodeKey>, v: impl Into<NodeKey>) -> Self {
        Edge {
            u: u.into(),
            v: v.into(),
            attributes: AttributeMap::new(),
        }
    }

    pub fn new_with_attributes(
        u: impl Into<NodeKey>,
        v: impl Into<NodeKey>,
        attributes: AttributeMap,
    ) -> Self {
        Edge {
            u: u.into(),
            v: v.into(),
            attributes,
        }
    }

    /// Symmetric identity of this edge
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.u, &self.v)
    }

    /// Set an attribute value, returning the previous one
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes.shift_remove(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Merge `attributes` into this edge; incoming values overwrite existing ones
    pub fn merge_attributes(&mut self, attributes: AttributeMap) {
        self.attributes.extend(attributes);
    }

    /// Numeric weight, if one is assigned
    ///
    /// `None` means "no weight", which is distinct from a weight of zero.
    pub fn weight(&self) -> Option<f64> {
        self.attributes.get(WEIGHT).and_then(AttrValue::as_number)
    }

    /// Check if this edge connects two nodes (in either order)
    pub fn connects(&self, a: &NodeKey, b: &NodeKey) -> bool {
        (&self.u == a && &self.v == b) || (&self.u == b && &self.v == a)
    }

    /// Check if `key` is one of the endpoints
    pub fn touches(&self, key: &NodeKey) -> bool {
        &self.u == key || &self.v == key
    }

    /// The endpoint opposite to `key`; a self-loop returns `key` itself
    pub fn other(&self, key: &NodeKey) -> Option<&NodeKey> {
        if &self.u == key {
            Some(&self.v)
        } else if &self.v == key {
            Some(&self.u)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.attributes == other.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::property::attributes;

    #[test]
    fn test_edge_connects_either_order() {
        let edge = Edge::new("node1", "node2");
        let (a, b) = (NodeKey::from("node1"), NodeKey::from("node2"));

        assert!(edge.connects(&a, &b));
        assert!(edge.connects(&b, &a));
        assert!(!edge.connects(&a, &NodeKey::from("node3")));
    }

    #[test]
    fn test_edge_equality_is_symmetric() {
        let e1 = Edge::new_with_attributes("p", "q", attributes([("attribut1", "jaune")]));
        let e2 = Edge::new_with_attributes("q", "p", attributes([("attribut1", "jaune")]));
        let e3 = Edge::new_with_attributes("q", "p", attributes([("attribut1", "gold")]));

        assert_eq!(e1, e2);
        assert_ne!(e1, e3);
        assert_eq!(e1.key(), e3.key());
    }

    #[test]
    fn test_edge_weight() {
        let mut edge = Edge::new("x", "y");
        assert_eq!(edge.weight(), None);

        edge.set_attribute(WEIGHT, 0);
        assert_eq!(edge.weight(), Some(0.0));

        edge.set_attribute(WEIGHT, 9999.5);
        assert_eq!(edge.weight(), Some(9999.5));

        edge.set_attribute(WEIGHT, "heavy");
        assert_eq!(edge.weight(), None);
    }

    #[test]
    fn test_other_endpoint() {
        let edge = Edge::new("a", "b");
        let a = NodeKey::from("a");
        assert_eq!(edge.other(&a), Some(&NodeKey::from("b")));
        assert_eq!(edge.other(&NodeKey::from("z")), None);

        let lp = Edge::new("a", "a");
        assert!(lp.is_self_loop());
        assert_eq!(lp.other(&a), Some(&a));
    }

    #[test]
    fn test_remove_attribute() {
        let mut edge = Edge::new("node1", "node2");
        edge.set_attribute("propiete_du_edge", 42);
        assert!(edge.has_attribute("propiete_du_edge"));

        let removed = edge.remove_attribute("propiete_du_edge");
        assert_eq!(removed, Some(AttrValue::Integer(42)));
        assert!(!edge.has_attribute("propiete_du_edge"));
    }
}
