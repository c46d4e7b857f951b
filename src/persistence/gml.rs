//! GML reader and writer
//!
//! Layout of a saved graph:
//!
//! ```text
//! graph [
//!   name "Carte du bourg-palette"
//!   node [
//!     id 0
//!     label "node1"
//!     age 200
//!   ]
//!   edge [
//!     source 0
//!     target 1
//!     weight 666
//!   ]
//! ]
//! ```
//!
//! Node keys go in `label`: integer keys as integers, text keys as strings.
//! Strings escape `&`, `"` and every non-printable or non-ASCII character as
//! an HTML entity. Nested maps are nested lists; attribute lists are nested
//! lists whose first entry is `_kind "list"` followed by one `_` entry per
//! element.

use crate::graph::{AttrValue, AttributeMap, GraphSnapshot, GraphStore, NodeKey};
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;
use std::collections::HashMap;
use std::io::Write;

use super::{PersistenceError, PersistenceResult};

#[derive(Parser)]
#[grammar = "persistence/gml.pest"]
struct GmlParser;

const NODE_RESERVED: [&str; 2] = ["id", "label"];
const EDGE_RESERVED: [&str; 2] = ["source", "target"];
const GRAPH_RESERVED: [&str; 4] = ["node", "edge", "directed", "multigraph"];

const LIST_MARKER: &str = "_kind";
const LIST_KIND: &str = "list";
const LIST_ITEM: &str = "_";

/// Parsed GML value before it is mapped onto the graph model
#[derive(Debug, Clone, PartialEq)]
enum GmlValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    List(Vec<(String, GmlValue)>),
}

// ============================================================
// Writing
// ============================================================

/// Write `snapshot` as a GML document
pub fn write<W: Write>(snapshot: &GraphSnapshot<'_>, w: &mut W) -> PersistenceResult<()> {
    writeln!(w, "graph [")?;

    for (name, value) in snapshot.graph_attributes() {
        check_name(name, "graph", &GRAPH_RESERVED)?;
        write_entry(w, 1, name, value)?;
    }

    let mut ids: HashMap<&NodeKey, usize> = HashMap::with_capacity(snapshot.node_count());
    for (id, node) in snapshot.nodes().enumerate() {
        ids.insert(&node.key, id);
        writeln!(w, "  node [")?;
        writeln!(w, "    id {}", id)?;
        match &node.key {
            NodeKey::Integer(i) => writeln!(w, "    label {}", i)?,
            NodeKey::String(s) => writeln!(w, "    label \"{}\"", escape(s))?,
        }
        for (name, value) in &node.attributes {
            check_name(name, "nodes", &NODE_RESERVED)?;
            write_entry(w, 2, name, value)?;
        }
        writeln!(w, "  ]")?;
    }

    for edge in snapshot.edges() {
        let endpoint_id = |key: &NodeKey| {
            ids.get(key).copied().ok_or_else(|| {
                PersistenceError::Format(format!("edge endpoint {} is not a node", key))
            })
        };
        let (source, target) = (endpoint_id(&edge.u)?, endpoint_id(&edge.v)?);

        writeln!(w, "  edge [")?;
        writeln!(w, "    source {}", source)?;
        writeln!(w, "    target {}", target)?;
        for (name, value) in &edge.attributes {
            check_name(name, "edges", &EDGE_RESERVED)?;
            write_entry(w, 2, name, value)?;
        }
        writeln!(w, "  ]")?;
    }

    writeln!(w, "]")?;
    Ok(())
}

fn write_entry<W: Write>(
    w: &mut W,
    depth: usize,
    key: &str,
    value: &AttrValue,
) -> PersistenceResult<()> {
    let indent = "  ".repeat(depth);
    match value {
        AttrValue::Integer(i) => writeln!(w, "{}{} {}", indent, key, i)?,
        AttrValue::Float(f) => writeln!(w, "{}{} {}", indent, key, format_float(*f))?,
        AttrValue::String(s) => writeln!(w, "{}{} \"{}\"", indent, key, escape(s))?,
        AttrValue::Boolean(b) => writeln!(w, "{}{} {}", indent, key, b)?,
        AttrValue::List(items) => {
            writeln!(w, "{}{} [", indent, key)?;
            writeln!(w, "{}  {} \"{}\"", indent, LIST_MARKER, LIST_KIND)?;
            for item in items {
                write_entry(w, depth + 1, LIST_ITEM, item)?;
            }
            writeln!(w, "{}]", indent)?;
        }
        AttrValue::Map(map) => {
            writeln!(w, "{}{} [", indent, key)?;
            for (name, inner) in map {
                check_name(name, "nested maps", &[LIST_MARKER])?;
                write_entry(w, depth + 1, name, inner)?;
            }
            writeln!(w, "{}]", indent)?;
        }
    }
    Ok(())
}

fn check_name(name: &str, scope: &'static str, reserved: &[&str]) -> PersistenceResult<()> {
    if reserved.contains(&name) {
        return Err(PersistenceError::ReservedAttribute {
            scope,
            name: name.to_string(),
        });
    }
    if !is_valid_key(name) {
        return Err(PersistenceError::InvalidAttributeName(name.to_string()));
    }
    Ok(())
}

/// GML keys: an ASCII letter or `_`, then ASCII letters, digits or `_`
fn is_valid_key(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Floats always carry a `.` or an exponent so they read back as floats
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "INF" } else { "-INF" }.to_string()
    } else {
        format!("{:?}", f)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => out.push_str(&format!("&#{};", c as u32)),
        }
    }
    out
}

// ============================================================
// Reading
// ============================================================

/// Parse a GML document into a new graph store
pub fn parse(input: &str) -> PersistenceResult<GraphStore> {
    let mut pairs = GmlParser::parse(Rule::document, input)?;
    let entries = match pairs.next() {
        Some(document) => parse_entries(document.into_inner())?,
        None => Vec::new(),
    };
    build_graph(entries)
}

fn parse_entries(pairs: Pairs<Rule>) -> PersistenceResult<Vec<(String, GmlValue)>> {
    let mut entries = Vec::new();
    for pair in pairs {
        if pair.as_rule() != Rule::entry {
            continue;
        }
        let mut inner = pair.into_inner();
        match (inner.next(), inner.next()) {
            (Some(key), Some(value)) => {
                entries.push((key.as_str().to_string(), parse_value(value)?));
            }
            _ => return Err(PersistenceError::Format("entry without a value".to_string())),
        }
    }
    Ok(entries)
}

fn parse_value(pair: Pair<Rule>) -> PersistenceResult<GmlValue> {
    let text = pair.as_str();
    match pair.as_rule() {
        Rule::integer => text
            .parse()
            .map(GmlValue::Integer)
            .map_err(|e| PersistenceError::Format(format!("integer {}: {}", text, e))),
        Rule::float => parse_float(text).map(GmlValue::Float),
        Rule::boolean => Ok(GmlValue::Boolean(text == "true")),
        Rule::string => {
            // Remove quotes
            let unquoted = &text[1..text.len() - 1];
            Ok(GmlValue::String(unescape(unquoted)))
        }
        Rule::list => Ok(GmlValue::List(parse_entries(pair.into_inner())?)),
        rule => Err(PersistenceError::Format(format!("unexpected {:?}", rule))),
    }
}

fn parse_float(text: &str) -> PersistenceResult<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let magnitude = match body {
        "INF" => f64::INFINITY,
        "NAN" => f64::NAN,
        _ => body
            .parse::<f64>()
            .map_err(|e| PersistenceError::Format(format!("float {}: {}", text, e)))?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let decoded = tail
            .find(';')
            .and_then(|end| decode_entity(&tail[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "quot" => Some('"'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "apos" => Some('\''),
        _ => {
            let code = match name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => name.strip_prefix('#')?.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn build_graph(entries: Vec<(String, GmlValue)>) -> PersistenceResult<GraphStore> {
    let mut items = None;
    for (key, value) in entries {
        if key == "graph" {
            match value {
                GmlValue::List(inner) => items = Some(inner),
                _ => return Err(PersistenceError::Format("'graph' must be a list".to_string())),
            }
        }
    }
    let items = items
        .ok_or_else(|| PersistenceError::Format("missing top-level 'graph' list".to_string()))?;

    let mut graph = GraphStore::new();
    let mut ids: HashMap<i64, NodeKey> = HashMap::new();
    let mut edges = Vec::new();

    for (key, value) in items {
        match key.as_str() {
            "directed" | "multigraph" => match value {
                GmlValue::Integer(0) => {}
                GmlValue::Integer(1) => {
                    return Err(PersistenceError::Format(format!(
                        "{} graphs are not supported",
                        key
                    )))
                }
                other => {
                    return Err(PersistenceError::Format(format!(
                        "'{}' must be 0 or 1, found {:?}",
                        key, other
                    )))
                }
            },
            "node" => {
                let (id, node_key, attributes) = parse_node(value)?;
                if graph.has_node(&node_key) {
                    return Err(PersistenceError::Format(format!(
                        "duplicate node label {}",
                        node_key
                    )));
                }
                if ids.insert(id, node_key.clone()).is_some() {
                    return Err(PersistenceError::Format(format!("duplicate node id {}", id)));
                }
                graph.add_node_with_attributes(node_key, attributes);
            }
            // Edges may precede the nodes they reference
            "edge" => edges.push(value),
            _ => {
                graph.set_graph_attribute(key, to_attr_value(value)?);
            }
        }
    }

    for value in edges {
        let (source, target, attributes) = parse_edge(value)?;
        let resolve = |id: i64| {
            ids.get(&id).cloned().ok_or_else(|| {
                PersistenceError::Format(format!("edge references unknown node id {}", id))
            })
        };
        let (u, v) = (resolve(source)?, resolve(target)?);
        graph.add_edge_with_attributes(u, v, attributes);
    }

    Ok(graph)
}

fn parse_node(value: GmlValue) -> PersistenceResult<(i64, NodeKey, AttributeMap)> {
    let GmlValue::List(items) = value else {
        return Err(PersistenceError::Format("'node' must be a list".to_string()));
    };

    let mut id = None;
    let mut label = None;
    let mut attributes = AttributeMap::new();
    for (key, value) in items {
        match key.as_str() {
            "id" => match value {
                GmlValue::Integer(i) => id = Some(i),
                other => {
                    return Err(PersistenceError::Format(format!(
                        "node id must be an integer, found {:?}",
                        other
                    )))
                }
            },
            "label" => match value {
                GmlValue::Integer(i) => label = Some(NodeKey::Integer(i)),
                GmlValue::String(s) => label = Some(NodeKey::String(s)),
                other => {
                    return Err(PersistenceError::Format(format!(
                        "node label must be an integer or a string, found {:?}",
                        other
                    )))
                }
            },
            _ => {
                attributes.insert(key, to_attr_value(value)?);
            }
        }
    }

    let id = id.ok_or_else(|| PersistenceError::Format("node without id".to_string()))?;
    let label = label.unwrap_or(NodeKey::Integer(id));
    Ok((id, label, attributes))
}

fn parse_edge(value: GmlValue) -> PersistenceResult<(i64, i64, AttributeMap)> {
    let GmlValue::List(items) = value else {
        return Err(PersistenceError::Format("'edge' must be a list".to_string()));
    };

    let mut source = None;
    let mut target = None;
    let mut attributes = AttributeMap::new();
    for (key, value) in items {
        match (key.as_str(), value) {
            ("source", GmlValue::Integer(i)) => source = Some(i),
            ("target", GmlValue::Integer(i)) => target = Some(i),
            ("source" | "target", other) => {
                return Err(PersistenceError::Format(format!(
                    "edge endpoint must be an integer, found {:?}",
                    other
                )))
            }
            (name, value) => {
                attributes.insert(name.to_string(), to_attr_value(value)?);
            }
        }
    }

    match (source, target) {
        (Some(s), Some(t)) => Ok((s, t, attributes)),
        _ => Err(PersistenceError::Format(
            "edge without source or target".to_string(),
        )),
    }
}

fn to_attr_value(value: GmlValue) -> PersistenceResult<AttrValue> {
    match value {
        GmlValue::Integer(i) => Ok(AttrValue::Integer(i)),
        GmlValue::Float(f) => Ok(AttrValue::Float(f)),
        GmlValue::String(s) => Ok(AttrValue::String(s)),
        GmlValue::Boolean(b) => Ok(AttrValue::Boolean(b)),
        GmlValue::List(items) => {
            let is_list = matches!(
                items.first(),
                Some((k, GmlValue::String(kind))) if k == LIST_MARKER && kind == LIST_KIND
            );
            if is_list {
                items
                    .into_iter()
                    .skip(1)
                    .map(|(k, v)| {
                        if k == LIST_ITEM {
                            to_attr_value(v)
                        } else {
                            Err(PersistenceError::Format(format!(
                                "list element keyed '{}' instead of '{}'",
                                k, LIST_ITEM
                            )))
                        }
                    })
                    .collect::<PersistenceResult<Vec<_>>>()
                    .map(AttrValue::List)
            } else {
                let mut map = AttributeMap::new();
                for (k, v) in items {
                    map.insert(k, to_attr_value(v)?);
                }
                Ok(AttrValue::Map(map))
            }
        }
    }
}
