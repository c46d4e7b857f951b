//! Attribute value types for nodes, edges and the graph itself
//!
//! Attribute maps have an open schema: any name may carry any value type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the edge attribute holding the optional numeric weight
pub const WEIGHT: &str = "weight";

/// Dynamically typed attribute value
///
/// Supports:
/// - Integer (i64)
/// - Float (f64)
/// - String
/// - Boolean
/// - List (Vec<AttrValue>)
/// - Map (nested AttributeMap)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    List(Vec<AttrValue>),
    Map(AttributeMap),
}

impl AttrValue {
    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<AttrValue>> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&AttributeMap> {
        match self {
            AttrValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Numeric view of integers and floats
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Integer(i) => Some(*i as f64),
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AttrValue::Integer(_) | AttrValue::Float(_))
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Integer(_) => "Integer",
            AttrValue::Float(_) => "Float",
            AttrValue::String(_) => "String",
            AttrValue::Boolean(_) => "Boolean",
            AttrValue::List(_) => "List",
            AttrValue::Map(_) => "Map",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Integer(i) => write!(f, "{}", i),
            AttrValue::Float(fl) => write!(f, "{}", fl),
            AttrValue::String(s) => write!(f, "'{}'", s),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::List(items) => {
                write!(f, "[")?;
                for (i, val) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            AttrValue::Map(map) => write!(f, "{}", DisplayMap(map)),
        }
    }
}

/// `Display` adapter printing an attribute map as `{'key': value, ...}`
pub struct DisplayMap<'a>(pub &'a AttributeMap);

impl fmt::Display for DisplayMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, val)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", key, val)?;
        }
        write!(f, "}}")
    }
}

// Convenience conversions
impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Integer(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<u32> for AttrValue {
    fn from(i: u32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<f32> for AttrValue {
    fn from(f: f32) -> Self {
        AttrValue::Float(f as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Boolean(b)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(items: Vec<AttrValue>) -> Self {
        AttrValue::List(items)
    }
}

impl From<AttributeMap> for AttrValue {
    fn from(map: AttributeMap) -> Self {
        AttrValue::Map(map)
    }
}

/// Attribute map for nodes, edges and graph metadata
///
/// Iteration follows first insertion; equality ignores order.
pub type AttributeMap = IndexMap<String, AttrValue>;

/// Build an attribute map from `(name, value)` pairs; later pairs win
pub fn attributes<I, K, V>(pairs: I) -> AttributeMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<AttrValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
