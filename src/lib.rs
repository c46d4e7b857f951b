//! Attribute Graph
//!
//! An in-memory undirected graph store where nodes, edges and the graph
//! itself carry open attribute maps.
//!
//! # Features
//!
//! - Caller-chosen node keys (integers or text)
//! - Undirected edges, at most one per unordered pair, self-loops allowed
//! - Typed attribute values: integers, floats, text, booleans, lists, maps
//! - Weighted edges through the reserved `weight` attribute
//! - Degree and adjacency queries in insertion order
//! - GML and JSON interchange, optionally gzip-compressed
//! - A [`Renderer`](render::Renderer) contract for external drawing backends
//!
//! ## Example Usage
//!
//! ```rust
//! use attrgraph::graph::{attributes, GraphStore};
//!
//! let mut graph = GraphStore::new();
//!
//! graph.add_node_with_attributes("node1", attributes([("nom", "Mourad")]));
//! graph.add_nodes_from(["node2", "node3"]);
//! graph.add_edge("node1", "node2");
//! graph.add_weighted_edges_from([("node1", "node3", 666)]).unwrap();
//!
//! assert_eq!(graph.degree("node1").unwrap(), 2);
//! assert_eq!(graph.edge("node3", "node1").unwrap().weight(), Some(666.0));
//!
//! graph.remove_node("node1").unwrap();
//! assert_eq!(graph.edge_count(), 0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod persistence;
pub mod render;

// Re-export main types for convenience
pub use graph::{
    AttrValue, AttributeMap, Edge, EdgeKey, GraphError, GraphResult, GraphSnapshot, GraphStore,
    Node, NodeKey,
};

pub use persistence::{Compression, Format, PersistenceError, PersistenceResult};

pub use render::{FontWeight, Layout, RenderOptions, Renderer};

pub use config::{Config, ConfigError, ConfigResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
