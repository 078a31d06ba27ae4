//! # relatable
//!
//! Declarative relationships for models that wrap a remote management API
//! (virtual machines and their storage controllers, network adapters, shared
//! folders, ...).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::LazyLock;
//!
//! use relatable::prelude::*;
//! use serde_json::json;
//!
//! struct NetworkAdapters;
//!
//! impl Populatable<Machine> for NetworkAdapters {
//!     fn populate_relationship(
//!         _owner: &Machine,
//!         data: &Value,
//!         _args: &[Value],
//!     ) -> relatable::Result<Value> {
//!         Ok(data["network_adapters"].clone())
//!     }
//! }
//!
//! impl Related<Machine> for NetworkAdapters {
//!     fn hooks() -> Hooks<Machine> {
//!         Hooks::new().populate::<Self>()
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct Machine {
//!     relationships: RelationshipRuntime,
//! }
//!
//! impl Relatable for Machine {
//!     type Error = RelatableError;
//!
//!     fn relationships() -> &'static Relationships<Self> {
//!         static RELATIONSHIPS: LazyLock<Relationships<Machine>> = LazyLock::new(|| {
//!             Relationships::new()
//!                 .relationship::<NetworkAdapters>("network_adapters", RelationshipOptions::new())
//!         });
//!         &RELATIONSHIPS
//!     }
//!
//!     fn relationship_runtime(&self) -> &RelationshipRuntime {
//!         &self.relationships
//!     }
//!
//!     fn relationship_runtime_mut(&mut self) -> &mut RelationshipRuntime {
//!         &mut self.relationships
//!     }
//! }
//!
//! relationship_accessors!(Machine { network_adapters });
//!
//! # fn main() -> relatable::Result<()> {
//! let mut machine = Machine::default();
//! machine.populate_relationships(&json!({ "network_adapters": ["nat"] }), &[])?;
//! assert_eq!(machine.network_adapters()?, Some(&json!(["nat"])));
//! # Ok(())
//! # }
//! ```
//!
//! ## Hooks
//!
//! | Capability      | Called by                                   |
//! |-----------------|---------------------------------------------|
//! | `Populatable`   | `populate_relationship(s)`                  |
//! | `Settable`      | `set_relationship`, generated `set_*`       |
//! | `Savable`       | `save_relationship(s)`                      |
//! | `Destroyable`   | `destroy_relationship(s)`                   |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for relationship operations
pub use relatable_core::error::Result;

/// Generates reader/writer accessors for declared relationships
pub use relatable_core::relationship_accessors;

pub use relatable_core::{
    Destroyable, Hooks, Populatable, Relatable, Related, RelationshipDescriptor,
    RelationshipRuntime, Relationships, Savable, Settable, Value,
};

/// Error types
pub mod error {
    pub use relatable_core::error::{NonSettableRelationshipError, RelatableError};
    pub use relatable_types::OptionsError;
}

/// Declaration options and their configuration file.
///
/// - `RelationshipOptions` - `lazy` plus pass-through extra keys
/// - `OptionsTable` - per-relationship options loaded from `relatable.toml`
pub mod config {
    pub use relatable_types::{ExtraOptions, OptionsTable, RelationshipOptions};
}

/// Everything needed to declare and drive relationships.
pub mod prelude {
    pub use crate::config::{OptionsTable, RelationshipOptions};
    pub use crate::error::{NonSettableRelationshipError, RelatableError};
    pub use relatable_core::relationship_accessors;
    pub use relatable_core::{
        Destroyable, Hooks, Populatable, Relatable, Related, RelationshipRuntime, Relationships,
        Savable, Settable, Value,
    };
}
