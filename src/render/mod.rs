//! Renderer contract
//!
//! Drawing is done outside this crate. A renderer receives a read-only
//! [`GraphSnapshot`], a [`Layout`] selector and [`RenderOptions`], and
//! produces whatever artifact it likes (an in-memory image, a file path, ...).

use crate::graph::GraphSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Node placement algorithm requested from a renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Random,
    Circular,
    Shell,
    Spectral,
    Spring,
    Planar,
    KamadaKawai,
}

impl Layout {
    pub const ALL: [Layout; 7] = [
        Layout::Random,
        Layout::Circular,
        Layout::Shell,
        Layout::Spectral,
        Layout::Spring,
        Layout::Planar,
        Layout::KamadaKawai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Random => "random",
            Layout::Circular => "circular",
            Layout::Shell => "shell",
            Layout::Spectral => "spectral",
            Layout::Spring => "spring",
            Layout::Planar => "planar",
            Layout::KamadaKawai => "kamada-kawai",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a layout name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown layout: {0}")]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == normalized)
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}

/// Label font weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Rendering switches passed alongside the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw node keys next to the nodes
    pub with_labels: bool,
    pub font_weight: FontWeight,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            with_labels: true,
            font_weight: FontWeight::Normal,
        }
    }
}

/// Produces an image artifact from a finalized graph snapshot
pub trait Renderer {
    /// The artifact produced, e.g. an encoded image buffer
    type Output;
    type Error: std::error::Error;

    fn render(
        &self,
        snapshot: &GraphSnapshot<'_>,
        layout: Layout,
        options: &RenderOptions,
    ) -> Result<Self::Output, Self::Error>;
}
