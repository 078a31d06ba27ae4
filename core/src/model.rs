//! The `Relatable` trait: relationship lifecycle for model instances.

use core::fmt;

use serde_json::Value;

use crate::error::NonSettableRelationshipError;
use crate::registry::Relationships;
use crate::runtime::RelationshipRuntime;

/// A model type that owns declared relationships.
///
/// Implementors supply the declaration table and access to the
/// per-instance [`RelationshipRuntime`]; every lifecycle operation is
/// provided. Fan-out operations visit relationships in declaration order
/// and stop at the first hook error, which is returned as is.
pub trait Relatable: fmt::Debug + Sized + 'static {
    /// Error type shared by this model's hooks and loader.
    type Error: From<NonSettableRelationshipError>;

    /// The model's relationship table.
    fn relationships() -> &'static Relationships<Self>;

    fn relationship_runtime(&self) -> &RelationshipRuntime;

    fn relationship_runtime_mut(&mut self) -> &mut RelationshipRuntime;

    /// Loads a lazy relationship on its first read.
    ///
    /// Implementations usually fetch the owner's raw data and hand it to
    /// [`populate_relationship`](Self::populate_relationship), which marks the
    /// relationship loaded. A load that populates nothing is retried on the
    /// next read.
    fn load_relationship(&mut self, name: &str) -> Result<(), Self::Error> {
        let _ = name;
        Ok(())
    }

    fn has_relationship(&self, name: &str) -> bool {
        Self::relationships().contains(name)
    }

    fn lazy_relationship(&self, name: &str) -> bool {
        Self::relationships()
            .get(name)
            .is_some_and(|descriptor| descriptor.is_lazy())
    }

    /// `true` for eager relationships, and for lazy ones once loaded.
    fn loaded_lazy_relationship(&self, name: &str) -> bool {
        !self.lazy_relationship(name) || self.relationship_runtime().is_loaded(name)
    }

    fn mark_lazy_relationship_loaded(&mut self, name: &str) {
        self.relationship_runtime_mut().mark_loaded(name);
    }

    /// Current value of `name`, loading it first if it is lazy and unloaded.
    fn read_relationship(&mut self, name: &str) -> Result<Option<&Value>, Self::Error> {
        if !self.loaded_lazy_relationship(name) {
            relatable_trace_load!(name);
            self.load_relationship(name)?;
        }
        Ok(self.relationship_runtime().get(name))
    }

    /// Assigns `value` through the related type's `set_relationship` hook and
    /// stores what the hook returns.
    fn set_relationship(&mut self, name: &str, value: Value) -> Result<(), Self::Error> {
        let descriptor = Self::relationships().get(name);
        let Some(hook) = descriptor.and_then(|d| d.hooks().set_hook()) else {
            return Err(NonSettableRelationshipError {
                name: name.into(),
                related: descriptor.map_or("<undeclared>", |d| d.related_type()),
                owner: format!("{:?}", self),
            }
            .into());
        };

        relatable_trace_hook!("set", name);
        let value = hook(&*self, self.relationship_runtime().get(name), value)?;
        self.relationship_runtime_mut().insert(name, value);
        Ok(())
    }

    /// Marks `name` loaded, then stores the result of the related type's
    /// `populate_relationship` hook when it has one. Undeclared names are
    /// ignored.
    fn populate_relationship(
        &mut self,
        name: &str,
        data: &Value,
        args: &[Value],
    ) -> Result<(), Self::Error> {
        let Some(descriptor) = Self::relationships().get(name) else {
            return Ok(());
        };

        self.mark_lazy_relationship_loaded(name);
        if let Some(hook) = descriptor.hooks().populate_hook() {
            relatable_trace_hook!("populate", name);
            let value = hook(&*self, data, args)?;
            self.relationship_runtime_mut().insert(name, value);
        }
        Ok(())
    }

    fn populate_relationships(&mut self, data: &Value, args: &[Value]) -> Result<(), Self::Error> {
        for name in Self::relationships().names() {
            self.populate_relationship(name, data, args)?;
        }
        Ok(())
    }

    /// Hands the stored value of `name` to the related type's
    /// `save_relationship` hook. Does not trigger a lazy load.
    fn save_relationship(&self, name: &str, args: &[Value]) -> Result<(), Self::Error> {
        let hook = Self::relationships()
            .get(name)
            .and_then(|d| d.hooks().save_hook());
        if let Some(hook) = hook {
            relatable_trace_hook!("save", name);
            hook(&*self, self.relationship_runtime().get(name), args)?;
        }
        Ok(())
    }

    fn save_relationships(&self, args: &[Value]) -> Result<(), Self::Error> {
        for name in Self::relationships().names() {
            self.save_relationship(name, args)?;
        }
        Ok(())
    }

    /// Reads `name` (loading it if needed) and hands the value to the related
    /// type's `destroy_relationship` hook.
    fn destroy_relationship(&mut self, name: &str, args: &[Value]) -> Result<(), Self::Error> {
        self.read_relationship(name)?;

        let hook = Self::relationships()
            .get(name)
            .and_then(|d| d.hooks().destroy_hook());
        if let Some(hook) = hook {
            relatable_trace_hook!("destroy", name);
            hook(&*self, self.relationship_runtime().get(name), args)?;
        }
        Ok(())
    }

    fn destroy_relationships(&mut self, args: &[Value]) -> Result<(), Self::Error> {
        for name in Self::relationships().names() {
            self.destroy_relationship(name, args)?;
        }
        Ok(())
    }
}
