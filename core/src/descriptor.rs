use core::fmt;

use compact_str::CompactString;
use relatable_types::{ExtraOptions, RelationshipOptions};
use serde_json::Value;

use crate::hooks::Hooks;
use crate::model::Relatable;

/// Declaration-time metadata for one relationship of an owning model `M`.
pub struct RelationshipDescriptor<M: Relatable> {
    name: CompactString,
    related: &'static str,
    options: RelationshipOptions,
    hooks: Hooks<M>,
}

impl<M: Relatable> RelationshipDescriptor<M> {
    pub fn new(
        name: impl Into<CompactString>,
        related: &'static str,
        hooks: Hooks<M>,
        options: RelationshipOptions,
    ) -> Self {
        Self {
            name: name.into(),
            related,
            options,
            hooks,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the related type, as given at declaration.
    #[inline]
    pub fn related_type(&self) -> &'static str {
        self.related
    }

    #[inline]
    pub fn is_lazy(&self) -> bool {
        self.options.is_lazy()
    }

    pub fn options(&self) -> &RelationshipOptions {
        &self.options
    }

    pub fn extra_options(&self) -> &ExtraOptions {
        &self.options.extra
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.option(key)
    }

    pub fn hooks(&self) -> &Hooks<M> {
        &self.hooks
    }

    pub(crate) fn upcast<C>(&self) -> RelationshipDescriptor<C>
    where
        C: Relatable + AsRef<M>,
        C::Error: From<M::Error>,
    {
        RelationshipDescriptor {
            name: self.name.clone(),
            related: self.related,
            options: self.options.clone(),
            hooks: self.hooks.upcast(),
        }
    }
}

impl<M: Relatable> Clone for RelationshipDescriptor<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            related: self.related,
            options: self.options.clone(),
            hooks: self.hooks.clone(),
        }
    }
}

impl<M: Relatable> fmt::Debug for RelationshipDescriptor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationshipDescriptor")
            .field("name", &self.name)
            .field("related", &self.related)
            .field("options", &self.options)
            .field("hooks", &self.hooks)
            .finish()
    }
}
