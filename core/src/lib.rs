//! Declarative relationships between API models.
//!
//! A model declares named relationships to related types in a
//! [`Relationships`] table. Each instance keeps the values in its
//! [`RelationshipRuntime`], and the [`Relatable`] trait drives the
//! populate / read / set / save / destroy lifecycle through the
//! [`hooks`] the related types opt into.

#[macro_use]
mod tracing;

mod accessors;
pub mod descriptor;
pub mod error;
pub mod hooks;
pub mod model;
pub mod registry;
pub mod runtime;

#[cfg(test)]
mod fixtures;

// Re-export key types and traits
pub use descriptor::RelationshipDescriptor;
pub use error::{NonSettableRelationshipError, RelatableError};
pub use hooks::{Destroyable, Hooks, Populatable, Related, Savable, Settable};
pub use model::Relatable;
pub use registry::Relationships;
pub use runtime::RelationshipRuntime;

pub use relatable_types::{ExtraOptions, OptionsError, OptionsTable, RelationshipOptions, Value};

#[doc(hidden)]
pub use paste;
