//! Per-instance relationship state.

use compact_str::CompactString;
use hashbrown::{HashMap, HashSet};
use serde_json::Value;

/// Current relationship values of one model instance, plus the set of
/// relationships already loaded.
///
/// Created empty with the instance and owned by it. Only the `Relatable`
/// lifecycle methods are expected to mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationshipRuntime {
    values: HashMap<CompactString, Value>,
    loaded: HashSet<CompactString>,
}

impl RelationshipRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`, if one was ever stored.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Stores `value` for `name`, returning the previous value.
    pub fn insert(&mut self, name: &str, value: Value) -> Option<Value> {
        self.values.insert(CompactString::new(name), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    /// Marks `name` loaded. Returns `false` if it already was.
    pub fn mark_loaded(&mut self, name: &str) -> bool {
        if self.loaded.contains(name) {
            return false;
        }
        self.loaded.insert(CompactString::new(name))
    }

    /// Forgets every value and loaded flag.
    pub fn clear(&mut self) {
        self.values.clear();
        self.loaded.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.loaded.is_empty()
    }
}
