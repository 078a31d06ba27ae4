//! Per-model relationship tables.

use core::any::type_name;
use core::fmt;

use compact_str::CompactString;
use hashbrown::HashMap;
use relatable_types::{OptionsTable, RelationshipOptions};

use crate::descriptor::RelationshipDescriptor;
use crate::hooks::{Hooks, Related};
use crate::model::Relatable;

/// Ordered table of the relationships declared on model `M`.
///
/// Iteration follows declaration order. Redeclaring a name replaces its
/// descriptor but keeps the position where the name was first introduced,
/// so a child table that overrides an inherited relationship still visits
/// it where the parent did.
///
/// Tables are meant to be built once and stored in a static:
///
/// ```ignore
/// static RELATIONSHIPS: LazyLock<Relationships<Machine>> = LazyLock::new(|| {
///     Relationships::new()
///         .relationship::<StorageControllers>("storage_controllers", RelationshipOptions::new())
///         .relationship::<NetworkAdapters>("network_adapters", RelationshipOptions::lazy())
/// });
/// ```
pub struct Relationships<M: Relatable> {
    entries: Vec<RelationshipDescriptor<M>>,
    index: HashMap<CompactString, usize>,
}

impl<M: Relatable> Relationships<M> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Starts a child table from a copy of `parent`.
    ///
    /// Parent hooks see the child through `AsRef<P>`. Declarations made on
    /// the returned table never reach `parent`.
    pub fn inheriting<P>(parent: &Relationships<P>) -> Self
    where
        P: Relatable,
        M: AsRef<P>,
        M::Error: From<P::Error>,
    {
        Self {
            entries: parent.entries.iter().map(|d| d.upcast()).collect(),
            index: parent.index.clone(),
        }
    }

    /// Builder form of [`declare`](Self::declare).
    #[must_use]
    pub fn relationship<T: Related<M>>(
        mut self,
        name: impl Into<CompactString>,
        options: RelationshipOptions,
    ) -> Self {
        self.declare::<T>(name, options);
        self
    }

    /// Builder form of [`declare_configured`](Self::declare_configured).
    #[must_use]
    pub fn configured_relationship<T: Related<M>>(
        mut self,
        name: impl Into<CompactString>,
        table: &OptionsTable,
    ) -> Self {
        self.declare_configured::<T>(name, table);
        self
    }

    /// Declares `name` as a relationship to `T`.
    pub fn declare<T: Related<M>>(
        &mut self,
        name: impl Into<CompactString>,
        options: RelationshipOptions,
    ) -> &mut Self {
        self.declare_with(name, type_name::<T>(), T::hooks(), options)
    }

    /// Declares `name` with the options `table` configures for it.
    pub fn declare_configured<T: Related<M>>(
        &mut self,
        name: impl Into<CompactString>,
        table: &OptionsTable,
    ) -> &mut Self {
        let name = name.into();
        let options = table.options_for(&name);
        self.declare::<T>(name, options)
    }

    /// Declares `name` from an explicit hook table.
    pub fn declare_with(
        &mut self,
        name: impl Into<CompactString>,
        related: &'static str,
        hooks: Hooks<M>,
        options: RelationshipOptions,
    ) -> &mut Self {
        let descriptor = RelationshipDescriptor::new(name, related, hooks, options);
        let existing = self.index.get(descriptor.name()).copied();
        match existing {
            Some(position) => self.entries[position] = descriptor,
            None => {
                self.index
                    .insert(CompactString::new(descriptor.name()), self.entries.len());
                self.entries.push(descriptor);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&RelationshipDescriptor<M>> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// `(name, descriptor)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RelationshipDescriptor<M>)> + '_ {
        self.entries.iter().map(|d| (d.name(), d))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(RelationshipDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: Relatable> Default for Relationships<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Relatable> Clone for Relationships<M> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<M: Relatable> fmt::Debug for Relationships<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
