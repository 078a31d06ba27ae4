//! Declaration-time types shared by the relatable crates.
//!
//! - [`RelationshipOptions`] - the options a relationship is declared with
//! - [`OptionsTable`] - per-relationship options loaded from `relatable.toml`

pub mod config;
pub mod options;

pub use config::{OptionsError, OptionsTable};
pub use options::{ExtraOptions, RelationshipOptions};

/// Raw payload type exchanged with related types and stored per relationship.
pub use serde_json::Value;
