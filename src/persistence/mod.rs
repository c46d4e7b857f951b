//! Persistence layer for the attribute graph
//!
//! Saves a graph to a file and loads it back. Two formats are supported:
//! - GML, the default interchange format
//! - a JSON node-link document
//!
//! Either may be gzip-compressed. [`save`] and [`load`] pick the format from
//! the file name (`.gml`, `.json`, optionally followed by `.gz`).

pub mod gml;
pub mod json;

use crate::graph::GraphStore;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// On-disk graph format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Gml,
    Json,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Gml => "gml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Compression applied around the serialized document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    None,
    Gzip,
}

/// Work out format and compression from a file name
pub fn detect(path: impl AsRef<Path>) -> PersistenceResult<(Format, Compression)> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| PersistenceError::UnknownFormat(path.display().to_string()))?;

    let (stem, compression) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, Compression::Gzip),
        None => (name.as_str(), Compression::None),
    };

    let format = if stem.ends_with(".gml") {
        Format::Gml
    } else if stem.ends_with(".json") {
        Format::Json
    } else {
        return Err(PersistenceError::UnknownFormat(path.display().to_string()));
    };

    Ok((format, compression))
}

/// Serialize `graph` into any writer
pub fn write_to<W: Write>(graph: &GraphStore, format: Format, w: &mut W) -> PersistenceResult<()> {
    let snapshot = graph.snapshot();
    match format {
        Format::Gml => gml::write(&snapshot, w),
        Format::Json => json::write(&snapshot, w),
    }
}

/// Serialize `graph` into a string
pub fn to_string(graph: &GraphStore, format: Format) -> PersistenceResult<String> {
    let mut buf = Vec::new();
    write_to(graph, format, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Parse a graph from text in the given format
pub fn from_str(input: &str, format: Format) -> PersistenceResult<GraphStore> {
    match format {
        Format::Gml => gml::parse(input),
        Format::Json => json::parse(input),
    }
}

/// Save `graph` to `path`, choosing the format from the file name
pub fn save(graph: &GraphStore, path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();
    let (format, compression) = detect(path)?;
    save_as(graph, path, format, compression)
}

/// Save `graph` to `path` with an explicit format
///
/// The document is fully serialized before the file is created, so a graph
/// that cannot be represented leaves no partial file behind.
pub fn save_as(
    graph: &GraphStore,
    path: impl AsRef<Path>,
    format: Format,
    compression: Compression,
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let mut document = Vec::new();
    write_to(graph, format, &mut document)?;

    let file = BufWriter::new(File::create(path)?);
    match compression {
        Compression::None => {
            let mut file = file;
            file.write_all(&document)?;
            file.flush()?;
        }
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(file, flate2::Compression::default());
            encoder.write_all(&document)?;
            encoder.finish()?.flush()?;
        }
    }

    info!(
        "Saved graph ({} nodes, {} edges) to {:?} as {}",
        graph.node_count(),
        graph.edge_count(),
        path,
        format
    );
    Ok(())
}

/// Load a graph from `path`, choosing the format from the file name
pub fn load(path: impl AsRef<Path>) -> PersistenceResult<GraphStore> {
    let path = path.as_ref();
    let (format, compression) = detect(path)?;
    load_as(path, format, compression)
}

/// Load a graph from `path` with an explicit format
pub fn load_as(
    path: impl AsRef<Path>,
    format: Format,
    compression: Compression,
) -> PersistenceResult<GraphStore> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let mut text = String::new();
    match compression {
        Compression::None => {
            let mut file = file;
            file.read_to_string(&mut text)?;
        }
        Compression::Gzip => {
            GzDecoder::new(file).read_to_string(&mut text)?;
        }
    }
    debug!("Read {} bytes from {:?}", text.len(), path);

    let graph = from_str(&text, format)?;
    info!(
        "Loaded graph ({} nodes, {} edges) from {:?}",
        graph.node_count(),
        graph.edge_count(),
        path
    );
    Ok(graph)
}

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GML syntax error: {0}")]
    Parse(#[from] pest::error::Error<gml::Rule>),

    #[error("Document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Malformed document: {0}")]
    Format(String),

    #[error("Attribute '{name}' is reserved on {scope}")]
    ReservedAttribute { scope: &'static str, name: String },

    #[error("Attribute name '{0}' cannot be written as a GML key")]
    InvalidAttributeName(String),

    #[error("Attribute '{name}' on {entity} is not a finite number and cannot be written as JSON")]
    NonFiniteFloat { entity: String, name: String },

    #[error("Cannot infer graph format from file name: {0}")]
    UnknownFormat(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
