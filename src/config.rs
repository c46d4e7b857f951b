//! Configuration for the attribute graph tools
//!
//! ```yaml
//! storage:
//!   path: graphe.gml
//!   format: gml
//!   compress: false
//! render:
//!   layout: random
//!   with_labels: true
//!   font_weight: bold
//! logging:
//!   level: info
//! ```
//!
//! Every section and field is optional.

use crate::persistence::{Compression, Format};
use crate::render::{FontWeight, Layout, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("storage.path must not be empty".into()));
        }

        if self.logging.level().is_none() {
            return Err(ConfigError::Invalid(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where the demo saves its graph
    pub path: PathBuf,
    pub format: Format,
    /// Gzip the saved document
    pub compress: bool,
}

impl StorageConfig {
    pub fn compression(&self) -> Compression {
        if self.compress {
            Compression::Gzip
        } else {
            Compression::None
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("graphe.gml"),
            format: Format::Gml,
            compress: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub layout: Layout,
    #[serde(flatten)]
    pub options: RenderOptions,
}

impl RenderConfig {
    pub fn font_weight(&self) -> FontWeight {
        self.options.font_weight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Parsed level, `None` if the configured name is not a tracing level
    pub fn level(&self) -> Option<tracing::Level> {
        self.level.parse().ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
