use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Settings for the catalog runner, read from an optional TOML file.
///
/// ```toml
/// color = false
/// headers = true
/// log_level = "debug"
/// patterns = ["command", "flyweight"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub color: bool,
    pub headers: bool,
    pub log_level: String,
    /// Default selection for `run` without names. Empty means every pattern.
    pub patterns: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            color: true,
            headers: true,
            log_level: "warn".to_string(),
            patterns: Vec::new(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Falls back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
