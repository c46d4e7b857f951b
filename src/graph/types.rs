//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-chosen key identifying a node
///
/// Keys are opaque to the store: it only hashes, compares and clones them.
/// Integer and text keys never compare equal to each other, so `1` and `"1"`
/// are two distinct nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum NodeKey {
    Integer(i64),
    String(String),
}

impl NodeKey {
    /// Get the text if this is a text key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeKey::String(s) => Some(s),
            NodeKey::Integer(_) => None,
        }
    }

    /// Get the integer if this is an integer key
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NodeKey::Integer(i) => Some(*i),
            NodeKey::String(_) => None,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Integer(i) => write!(f, "{}", i),
            NodeKey::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&NodeKey> for NodeKey {
    fn from(key: &NodeKey) -> Self {
        key.clone()
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        NodeKey::String(s)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey::String(s.to_string())
    }
}

impl From<&String> for NodeKey {
    fn from(s: &String) -> Self {
        NodeKey::String(s.clone())
    }
}

impl From<char> for NodeKey {
    fn from(c: char) -> Self {
        NodeKey::String(c.to_string())
    }
}

impl From<i64> for NodeKey {
    fn from(i: i64) -> Self {
        NodeKey::Integer(i)
    }
}

impl From<i32> for NodeKey {
    fn from(i: i32) -> Self {
        NodeKey::Integer(i as i64)
    }
}

impl From<u32> for NodeKey {
    fn from(i: u32) -> Self {
        NodeKey::Integer(i as i64)
    }
}

/// Identity of an undirected edge
///
/// The pair is stored in sorted order so that `EdgeKey::new(a, b)` and
/// `EdgeKey::new(b, a)` hash and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(NodeKey, NodeKey);

impl EdgeKey {
    pub fn new(u: impl Into<NodeKey>, v: impl Into<NodeKey>) -> Self {
        let (u, v) = (u.into(), v.into());
        if u <= v {
            EdgeKey(u, v)
        } else {
            EdgeKey(v, u)
        }
    }

    /// Endpoints in canonical (sorted) order
    pub fn endpoints(&self) -> (&NodeKey, &NodeKey) {
        (&self.0, &self.1)
    }

    pub fn is_self_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_key_conversions() {
        let key: NodeKey = "node1".into();
        assert_eq!(key.as_str(), Some("node1"));
        assert_eq!(key.as_integer(), None);

        let key: NodeKey = 42i64.into();
        assert_eq!(key.as_integer(), Some(42));

        let key: NodeKey = 's'.into();
        assert_eq!(key, NodeKey::String("s".to_string()));
    }

    #[test]
    fn test_integer_and_text_keys_differ() {
        let int_key: NodeKey = 1.into();
        let text_key: NodeKey = "1".into();
        assert_ne!(int_key, text_key);
        assert_eq!(format!("{}", int_key), format!("{}", text_key));
    }

    #[test]
    fn test_edge_key_is_symmetric() {
        assert_eq!(EdgeKey::new("a", "b"), EdgeKey::new("b", "a"));
        assert_ne!(EdgeKey::new("a", "b"), EdgeKey::new("a", "c"));

        let key = EdgeKey::new("q", "p");
        let (first, second) = key.endpoints();
        assert_eq!(first.as_str(), Some("p"));
        assert_eq!(second.as_str(), Some("q"));
    }

    #[test]
    fn test_edge_key_self_loop() {
        assert!(EdgeKey::new("x", "x").is_self_loop());
        assert!(!EdgeKey::new("x", "y").is_self_loop());
    }

    #[test]
    fn test_key_ordering() {
        let a: NodeKey = 1.into();
        let b: NodeKey = 2.into();
        assert!(a < b);
    }
}
