//! Capability hooks a related type may implement.
//!
//! Hooks are type-level functions: they are called on the related *type*
//! with the owning model instance as their first argument. A related type
//! implements any subset of [`Populatable`], [`Settable`], [`Savable`] and
//! [`Destroyable`], then lists the ones it opted into in [`Related::hooks`].
//!
//! ```ignore
//! impl Related<Machine> for NetworkAdapters {
//!     fn hooks() -> Hooks<Machine> {
//!         Hooks::new().populate::<Self>().save::<Self>()
//!     }
//! }
//! ```

use core::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::model::Relatable;

type HookError<M> = <M as Relatable>::Error;

pub(crate) type PopulateFn<M> =
    Arc<dyn Fn(&M, &Value, &[Value]) -> Result<Value, HookError<M>> + Send + Sync>;
pub(crate) type SetFn<M> =
    Arc<dyn Fn(&M, Option<&Value>, Value) -> Result<Value, HookError<M>> + Send + Sync>;
pub(crate) type SaveFn<M> =
    Arc<dyn Fn(&M, Option<&Value>, &[Value]) -> Result<(), HookError<M>> + Send + Sync>;
pub(crate) type DestroyFn<M> =
    Arc<dyn Fn(&M, Option<&Value>, &[Value]) -> Result<(), HookError<M>> + Send + Sync>;

/// Builds a relationship's value from the owner's raw data.
pub trait Populatable<M: Relatable> {
    /// Returns the value stored for the relationship. `args` are the
    /// trailing arguments given to `populate_relationship(s)`.
    fn populate_relationship(owner: &M, data: &Value, args: &[Value]) -> Result<Value, M::Error>;
}

/// Accepts assignments to a relationship.
pub trait Settable<M: Relatable> {
    /// Returns the value to store in place of `new`.
    fn set_relationship(owner: &M, current: Option<&Value>, new: Value) -> Result<Value, M::Error>;
}

/// Pushes a relationship's in-memory state back to the external system.
pub trait Savable<M: Relatable> {
    fn save_relationship(owner: &M, current: Option<&Value>, args: &[Value]) -> Result<(), M::Error>;
}

/// Tears a relationship down.
pub trait Destroyable<M: Relatable> {
    fn destroy_relationship(
        owner: &M,
        current: Option<&Value>,
        args: &[Value],
    ) -> Result<(), M::Error>;
}

/// A type that can appear on the far side of a relationship owned by `M`.
pub trait Related<M: Relatable>: 'static {
    /// The hooks this type implements. None by default.
    fn hooks() -> Hooks<M> {
        Hooks::new()
    }
}

/// Dispatch table of the optional hooks of one related type.
///
/// Each slot is either empty (the related type lacks the capability) or a
/// shared function object. Tables are cheap to clone.
pub struct Hooks<M: Relatable> {
    populate: Option<PopulateFn<M>>,
    set: Option<SetFn<M>>,
    save: Option<SaveFn<M>>,
    destroy: Option<DestroyFn<M>>,
}

impl<M: Relatable> Hooks<M> {
    /// A table with no hooks.
    pub fn new() -> Self {
        Self {
            populate: None,
            set: None,
            save: None,
            destroy: None,
        }
    }

    /// Registers `T`'s [`Populatable`] implementation.
    #[must_use]
    pub fn populate<T: Populatable<M> + 'static>(self) -> Self {
        self.on_populate(<T as Populatable<M>>::populate_relationship)
    }

    /// Registers `T`'s [`Settable`] implementation.
    #[must_use]
    pub fn set<T: Settable<M> + 'static>(self) -> Self {
        self.on_set(<T as Settable<M>>::set_relationship)
    }

    /// Registers `T`'s [`Savable`] implementation.
    #[must_use]
    pub fn save<T: Savable<M> + 'static>(self) -> Self {
        self.on_save(<T as Savable<M>>::save_relationship)
    }

    /// Registers `T`'s [`Destroyable`] implementation.
    #[must_use]
    pub fn destroy<T: Destroyable<M> + 'static>(self) -> Self {
        self.on_destroy(<T as Destroyable<M>>::destroy_relationship)
    }

    #[must_use]
    pub fn on_populate<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, &Value, &[Value]) -> Result<Value, M::Error> + Send + Sync + 'static,
    {
        let f: PopulateFn<M> = Arc::new(f);
        self.populate = Some(f);
        self
    }

    #[must_use]
    pub fn on_set<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, Option<&Value>, Value) -> Result<Value, M::Error> + Send + Sync + 'static,
    {
        let f: SetFn<M> = Arc::new(f);
        self.set = Some(f);
        self
    }

    #[must_use]
    pub fn on_save<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, Option<&Value>, &[Value]) -> Result<(), M::Error> + Send + Sync + 'static,
    {
        let f: SaveFn<M> = Arc::new(f);
        self.save = Some(f);
        self
    }

    #[must_use]
    pub fn on_destroy<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, Option<&Value>, &[Value]) -> Result<(), M::Error> + Send + Sync + 'static,
    {
        let f: DestroyFn<M> = Arc::new(f);
        self.destroy = Some(f);
        self
    }

    pub fn can_populate(&self) -> bool {
        self.populate.is_some()
    }

    pub fn can_set(&self) -> bool {
        self.set.is_some()
    }

    pub fn can_save(&self) -> bool {
        self.save.is_some()
    }

    pub fn can_destroy(&self) -> bool {
        self.destroy.is_some()
    }

    pub(crate) fn populate_hook(&self) -> Option<&PopulateFn<M>> {
        self.populate.as_ref()
    }

    pub(crate) fn set_hook(&self) -> Option<&SetFn<M>> {
        self.set.as_ref()
    }

    pub(crate) fn save_hook(&self) -> Option<&SaveFn<M>> {
        self.save.as_ref()
    }

    pub(crate) fn destroy_hook(&self) -> Option<&DestroyFn<M>> {
        self.destroy.as_ref()
    }

    /// Re-targets every hook at a child owner type.
    ///
    /// The child is viewed as its parent through `AsRef<M>` and hook errors
    /// are converted with `From`, which is the identity when both owners
    /// share an error type.
    pub(crate) fn upcast<C>(&self) -> Hooks<C>
    where
        C: Relatable + AsRef<M>,
        C::Error: From<M::Error>,
    {
        Hooks {
            populate: self.populate.as_ref().map(|f| {
                let f = Arc::clone(f);
                let g: PopulateFn<C> = Arc::new(
                    move |owner: &C, data: &Value, args: &[Value]| -> Result<Value, C::Error> {
                        f(owner.as_ref(), data, args).map_err(<C::Error as From<M::Error>>::from)
                    },
                );
                g
            }),
            set: self.set.as_ref().map(|f| {
                let f = Arc::clone(f);
                let g: SetFn<C> = Arc::new(
                    move |owner: &C, current: Option<&Value>, new: Value| -> Result<Value, C::Error> {
                        f(owner.as_ref(), current, new).map_err(<C::Error as From<M::Error>>::from)
                    },
                );
                g
            }),
            save: self.save.as_ref().map(|f| {
                let f = Arc::clone(f);
                let g: SaveFn<C> = Arc::new(
                    move |owner: &C, current: Option<&Value>, args: &[Value]| -> Result<(), C::Error> {
                        f(owner.as_ref(), current, args).map_err(<C::Error as From<M::Error>>::from)
                    },
                );
                g
            }),
            destroy: self.destroy.as_ref().map(|f| {
                let f = Arc::clone(f);
                let g: DestroyFn<C> = Arc::new(
                    move |owner: &C, current: Option<&Value>, args: &[Value]| -> Result<(), C::Error> {
                        f(owner.as_ref(), current, args).map_err(<C::Error as From<M::Error>>::from)
                    },
                );
                g
            }),
        }
    }
}

impl<M: Relatable> Default for Hooks<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Relatable> Clone for Hooks<M> {
    fn clone(&self) -> Self {
        Self {
            populate: self.populate.clone(),
            set: self.set.clone(),
            save: self.save.clone(),
            destroy: self.destroy.clone(),
        }
    }
}

impl<M: Relatable> fmt::Debug for Hooks<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("populate", &self.can_populate())
            .field("set", &self.can_set())
            .field("save", &self.can_save())
            .field("destroy", &self.can_destroy())
            .finish()
    }
}
