//! YAML-loadable value table configuration.
//!
//! A tables file overrides any subset of the built-in tables:
//!
//! ```yaml
//! names:
//!   first_names: [Ada, Grace]
//! address:
//!   cities: [Springfield]
//! content:
//!   words: [alpha, beta, gamma]
//! ```
//!
//! Missing sections and missing fields keep their defaults.

use crate::values::{AddressTable, ContentTable, NameTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for table loading.
#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    /// Error reading tables file
    #[error("Failed to read tables file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Complete set of tables a generator draws from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueTables {
    pub names: NameTable,
    pub address: AddressTable,
    pub content: ContentTable,
}

impl ValueTables {
    /// Load tables from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TablesError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse tables from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, TablesError> {
        // serde_yaml rejects an empty document
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize tables to YAML.
    pub fn to_yaml(&self) -> Result<String, TablesError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
