//! Configuration types for relatable.toml

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::options::RelationshipOptions;

/// Per-relationship declaration options read from configuration.
///
/// ```toml
/// [relationships.network_adapters]
/// lazy = true
/// slots = 8
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OptionsTable {
    /// Options keyed by relationship name
    #[serde(default)]
    pub relationships: BTreeMap<String, RelationshipOptions>,
}

impl OptionsTable {
    /// Load the options table from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse the options table from a TOML string
    pub fn parse(s: &str) -> Result<Self, OptionsError> {
        toml::from_str(s).map_err(|e| OptionsError::ParseError(e.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&RelationshipOptions> {
        self.relationships.get(name)
    }

    /// Options configured for `name`, or the defaults when none are.
    pub fn options_for(&self, name: &str) -> RelationshipOptions {
        self.get(name).cloned().unwrap_or_default()
    }

    pub fn insert(&mut self, name: impl Into<String>, options: RelationshipOptions) {
        self.relationships.insert(name.into(), options);
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("JSON error: {0}")]
    JsonError(String),
}
