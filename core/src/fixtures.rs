//! Models and related types shared by the unit tests.

use std::cell::RefCell;
use std::sync::LazyLock;

use relatable_types::RelationshipOptions;
use serde_json::{Value, json};

use crate::error::RelatableError;
use crate::hooks::{Destroyable, Hooks, Populatable, Related, Savable, Settable};
use crate::model::Relatable;
use crate::registry::Relationships;
use crate::runtime::RelationshipRuntime;

/// A model that records every hook call it receives.
pub(crate) trait Recording: Relatable<Error = RelatableError> {
    fn calls(&self) -> &RefCell<Vec<String>>;

    fn record(&self, call: String) {
        self.calls().borrow_mut().push(call);
    }

    fn recorded(&self) -> Vec<String> {
        self.calls().borrow().clone()
    }
}

fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "<none>".to_string(), Value::to_string)
}

/// Populates to `"FOO"`; saves and destroys by recording.
pub(crate) struct Relatee;

impl<M: Recording> Populatable<M> for Relatee {
    fn populate_relationship(owner: &M, data: &Value, args: &[Value]) -> Result<Value, M::Error> {
        owner.record(format!("populate {data} {args:?}"));
        Ok(json!("FOO"))
    }
}

impl<M: Recording> Savable<M> for Relatee {
    fn save_relationship(owner: &M, current: Option<&Value>, args: &[Value]) -> Result<(), M::Error> {
        owner.record(format!("save {} {args:?}", describe(current)));
        Ok(())
    }
}

impl<M: Recording> Destroyable<M> for Relatee {
    fn destroy_relationship(
        owner: &M,
        current: Option<&Value>,
        args: &[Value],
    ) -> Result<(), M::Error> {
        owner.record(format!("destroy {} {args:?}", describe(current)));
        Ok(())
    }
}

impl<M: Recording> Related<M> for Relatee {
    fn hooks() -> Hooks<M> {
        Hooks::new().populate::<Self>().save::<Self>().destroy::<Self>()
    }
}

/// Settable only; wraps whatever is assigned.
pub(crate) struct BarRelatee;

impl<M: Recording> Settable<M> for BarRelatee {
    fn set_relationship(owner: &M, current: Option<&Value>, new: Value) -> Result<Value, M::Error> {
        owner.record(format!("set {} {new}", describe(current)));
        Ok(json!({ "wrapped": new }))
    }
}

impl<M: Recording> Related<M> for BarRelatee {
    fn hooks() -> Hooks<M> {
        Hooks::new().set::<Self>()
    }
}

/// No hooks at all.
pub(crate) struct Empty;

impl<M: Relatable> Related<M> for Empty {}

#[derive(Debug, Default)]
pub(crate) struct Model {
    runtime: RelationshipRuntime,
    calls: RefCell<Vec<String>>,
}

impl Recording for Model {
    fn calls(&self) -> &RefCell<Vec<String>> {
        &self.calls
    }
}

impl Relatable for Model {
    type Error = RelatableError;

    fn relationships() -> &'static Relationships<Self> {
        static RELATIONSHIPS: LazyLock<Relationships<Model>> = LazyLock::new(|| {
            Relationships::new()
                .relationship::<Relatee>("foos", RelationshipOptions::new())
                .relationship::<BarRelatee>("bars", RelationshipOptions::new())
        });
        &RELATIONSHIPS
    }

    fn relationship_runtime(&self) -> &RelationshipRuntime {
        &self.runtime
    }

    fn relationship_runtime_mut(&mut self) -> &mut RelationshipRuntime {
        &mut self.runtime
    }
}

crate::relationship_accessors!(Model { foos, bars });

/// `foos` is lazy. Loading populates only when `populate_on_load` is set.
#[derive(Debug, Default)]
pub(crate) struct LazyModel {
    runtime: RelationshipRuntime,
    calls: RefCell<Vec<String>>,
    pub(crate) populate_on_load: bool,
    pub(crate) loads: Vec<String>,
}

impl Recording for LazyModel {
    fn calls(&self) -> &RefCell<Vec<String>> {
        &self.calls
    }
}

impl Relatable for LazyModel {
    type Error = RelatableError;

    fn relationships() -> &'static Relationships<Self> {
        static RELATIONSHIPS: LazyLock<Relationships<LazyModel>> = LazyLock::new(|| {
            Relationships::new()
                .relationship::<Relatee>("foos", RelationshipOptions::lazy())
                .relationship::<BarRelatee>("bars", RelationshipOptions::new())
        });
        &RELATIONSHIPS
    }

    fn relationship_runtime(&self) -> &RelationshipRuntime {
        &self.runtime
    }

    fn relationship_runtime_mut(&mut self) -> &mut RelationshipRuntime {
        &mut self.runtime
    }

    fn load_relationship(&mut self, name: &str) -> Result<(), RelatableError> {
        self.loads.push(name.to_string());
        if self.populate_on_load {
            self.populate_relationship(name, &json!({ "loaded": name }), &[])?;
        }
        Ok(())
    }
}

impl LazyModel {
    /// A model whose loader populates `{"loaded": name}`.
    pub(crate) fn populating() -> Self {
        LazyModel {
            populate_on_load: true,
            ..LazyModel::default()
        }
    }
}

crate::relationship_accessors!(LazyModel { foos, bars });

/// Inherits `Model`'s table, overrides `bars` and adds `bazs`.
#[derive(Debug, Default)]
pub(crate) struct SubModel {
    base: Model,
}

impl AsRef<Model> for SubModel {
    fn as_ref(&self) -> &Model {
        &self.base
    }
}

impl Recording for SubModel {
    fn calls(&self) -> &RefCell<Vec<String>> {
        self.base.calls()
    }
}

impl Relatable for SubModel {
    type Error = RelatableError;

    fn relationships() -> &'static Relationships<Self> {
        static RELATIONSHIPS: LazyLock<Relationships<SubModel>> = LazyLock::new(|| {
            Relationships::inheriting(Model::relationships())
                .relationship::<Relatee>("bars", RelationshipOptions::lazy())
                .relationship::<Empty>("bazs", RelationshipOptions::new())
        });
        &RELATIONSHIPS
    }

    fn relationship_runtime(&self) -> &RelationshipRuntime {
        &self.base.runtime
    }

    fn relationship_runtime_mut(&mut self) -> &mut RelationshipRuntime {
        &mut self.base.runtime
    }
}
