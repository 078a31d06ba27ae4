//! Options a relationship is declared with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::OptionsError;

/// Declaration-time parameters that are not interpreted by the registry.
pub type ExtraOptions = serde_json::Map<String, Value>;

/// Options passed when declaring a relationship.
///
/// `lazy` is the only key the runtime interprets. Every other key is kept
/// verbatim in [`extra`](Self::extra) so models can read their own
/// declaration parameters back from the descriptor.
///
/// # Examples
///
/// ```
/// use relatable_types::RelationshipOptions;
///
/// let options = RelationshipOptions::parse("lazy = true\ndependent = \"destroy\"").unwrap();
/// assert!(options.is_lazy());
/// assert_eq!(options.option("dependent").and_then(|v| v.as_str()), Some("destroy"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RelationshipOptions {
    /// Defer materialization until the relationship is first read
    #[serde(default)]
    pub lazy: bool,
    /// Everything else, passed through untouched
    #[serde(flatten)]
    pub extra: ExtraOptions,
}

impl RelationshipOptions {
    /// Non-lazy options with no extra keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `RelationshipOptions::new().with_lazy(true)`.
    pub fn lazy() -> Self {
        Self::new().with_lazy(true)
    }

    #[must_use]
    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// Adds (or replaces) an extra declaration parameter.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Looks up an extra declaration parameter.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Parse options from a TOML table body.
    pub fn parse(s: &str) -> Result<Self, OptionsError> {
        toml::from_str(s).map_err(|e| OptionsError::ParseError(e.to_string()))
    }

    /// Build options from a JSON object such as `{"lazy": true}`.
    pub fn from_json(value: Value) -> Result<Self, OptionsError> {
        serde_json::from_value(value).map_err(|e| OptionsError::JsonError(e.to_string()))
    }
}
