//! JSON node-link document
//!
//! ```json
//! {
//!   "graph": { "name": { "String": "demo" } },
//!   "nodes": [ { "key": "node1", "attributes": { "age": { "Integer": 200 } } } ],
//!   "edges": [ { "source": "node1", "target": 7, "attributes": {} } ]
//! }
//! ```
//!
//! Node keys are plain JSON strings or integers. Attribute values keep their
//! variant tag so integers and floats stay distinct. JSON has no NaN or
//! infinity, so writing a graph that holds one fails; use GML for them.

use crate::graph::{AttrValue, AttributeMap, GraphSnapshot, GraphStore, NodeKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use super::{PersistenceError, PersistenceResult};

#[derive(Serialize)]
struct DocumentRef<'a> {
    graph: &'a AttributeMap,
    nodes: Vec<NodeRef<'a>>,
    edges: Vec<EdgeRef<'a>>,
}

#[derive(Serialize)]
struct NodeRef<'a> {
    key: JsonKeyRef<'a>,
    attributes: &'a AttributeMap,
}

#[derive(Serialize)]
struct EdgeRef<'a> {
    source: JsonKeyRef<'a>,
    target: JsonKeyRef<'a>,
    attributes: &'a AttributeMap,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonKeyRef<'a> {
    Integer(i64),
    String(&'a str),
}

impl<'a> From<&'a NodeKey> for JsonKeyRef<'a> {
    fn from(key: &'a NodeKey) -> Self {
        match key {
            NodeKey::Integer(i) => JsonKeyRef::Integer(*i),
            NodeKey::String(s) => JsonKeyRef::String(s),
        }
    }
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    graph: AttributeMap,
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Deserialize)]
struct NodeRecord {
    key: JsonKey,
    #[serde(default)]
    attributes: AttributeMap,
}

#[derive(Deserialize)]
struct EdgeRecord {
    source: JsonKey,
    target: JsonKey,
    #[serde(default)]
    attributes: AttributeMap,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonKey {
    Integer(i64),
    String(String),
}

impl From<JsonKey> for NodeKey {
    fn from(key: JsonKey) -> Self {
        match key {
            JsonKey::Integer(i) => NodeKey::Integer(i),
            JsonKey::String(s) => NodeKey::String(s),
        }
    }
}

/// Write `snapshot` as a pretty-printed JSON document
///
/// Fails before writing anything if an attribute holds NaN or an infinity.
pub fn write<W: Write>(snapshot: &GraphSnapshot<'_>, w: &mut W) -> PersistenceResult<()> {
    check_finite("graph", snapshot.graph_attributes())?;
    for node in snapshot.nodes() {
        check_finite(&format!("node {}", node.key), &node.attributes)?;
    }
    for edge in snapshot.edges() {
        check_finite(&format!("edge {}", edge.key()), &edge.attributes)?;
    }

    let document = DocumentRef {
        graph: snapshot.graph_attributes(),
        nodes: snapshot
            .nodes()
            .map(|n| NodeRef {
                key: (&n.key).into(),
                attributes: &n.attributes,
            })
            .collect(),
        edges: snapshot
            .edges()
            .map(|e| EdgeRef {
                source: (&e.u).into(),
                target: (&e.v).into(),
                attributes: &e.attributes,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *w, &document)?;
    writeln!(w)?;
    Ok(())
}

fn check_finite(entity: &str, attributes: &AttributeMap) -> PersistenceResult<()> {
    match attributes.iter().find(|(_, value)| !is_finite(value)) {
        Some((name, _)) => Err(PersistenceError::NonFiniteFloat {
            entity: entity.to_string(),
            name: name.clone(),
        }),
        None => Ok(()),
    }
}

fn is_finite(value: &AttrValue) -> bool {
    match value {
        AttrValue::Float(f) => f.is_finite(),
        AttrValue::List(items) => items.iter().all(is_finite),
        AttrValue::Map(map) => map.values().all(is_finite),
        _ => true,
    }
}

/// Parse a JSON document into a new graph store
///
/// Every edge endpoint must be listed under `nodes`.
pub fn parse(input: &str) -> PersistenceResult<GraphStore> {
    let document: Document = serde_json::from_str(input)?;

    let mut graph = GraphStore::new();
    for (name, value) in document.graph {
        graph.set_graph_attribute(name, value);
    }

    let mut known = HashSet::with_capacity(document.nodes.len());
    for record in document.nodes {
        let key = NodeKey::from(record.key);
        known.insert(key.clone());
        graph.add_node_with_attributes(key, record.attributes);
    }

    for record in document.edges {
        let (u, v) = (NodeKey::from(record.source), NodeKey::from(record.target));
        for endpoint in [&u, &v] {
            if !known.contains(endpoint) {
                return Err(PersistenceError::Format(format!(
                    "edge references unknown node {}",
                    endpoint
                )));
            }
        }
        graph.add_edge_with_attributes(u, v, record.attributes);
    }

    Ok(graph)
}
