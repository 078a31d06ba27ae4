use std::hint::black_box;
use std::sync::LazyLock;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use relatable::prelude::*;
use serde_json::json;

// ============================================================================
// Model Definitions
// ============================================================================

struct Controllers;

impl Populatable<Machine> for Controllers {
    fn populate_relationship(
        _owner: &Machine,
        data: &Value,
        _args: &[Value],
    ) -> relatable::Result<Value> {
        Ok(data["storage_controllers"].clone())
    }
}

impl Settable<Machine> for Controllers {
    fn set_relationship(
        _owner: &Machine,
        _current: Option<&Value>,
        new: Value,
    ) -> relatable::Result<Value> {
        Ok(new)
    }
}

impl Related<Machine> for Controllers {
    fn hooks() -> Hooks<Machine> {
        Hooks::new().populate::<Self>().set::<Self>()
    }
}

struct Adapters;

impl Populatable<Machine> for Adapters {
    fn populate_relationship(
        _owner: &Machine,
        data: &Value,
        _args: &[Value],
    ) -> relatable::Result<Value> {
        Ok(data["network_adapters"].clone())
    }
}

impl Related<Machine> for Adapters {
    fn hooks() -> Hooks<Machine> {
        Hooks::new().populate::<Self>()
    }
}

#[derive(Debug, Default)]
struct Machine {
    relationships: RelationshipRuntime,
}

impl Relatable for Machine {
    type Error = RelatableError;

    fn relationships() -> &'static Relationships<Self> {
        static RELATIONSHIPS: LazyLock<Relationships<Machine>> = LazyLock::new(|| {
            Relationships::new()
                .relationship::<Controllers>("storage_controllers", RelationshipOptions::new())
                .relationship::<Adapters>("network_adapters", RelationshipOptions::lazy())
        });
        &RELATIONSHIPS
    }

    fn relationship_runtime(&self) -> &RelationshipRuntime {
        &self.relationships
    }

    fn relationship_runtime_mut(&mut self) -> &mut RelationshipRuntime {
        &mut self.relationships
    }
}

relationship_accessors!(Machine {
    storage_controllers,
    network_adapters,
});

fn payload() -> Value {
    json!({
        "storage_controllers": [{ "name": "SATA", "bus": "sata" }],
        "network_adapters": [{ "slot": 0, "attachment": "nat" }],
    })
}

// ============================================================================
// Benchmarks
// ============================================================================

fn populate(c: &mut Criterion) {
    let data = payload();
    c.bench_function("populate_relationships", |b| {
        b.iter_batched(
            Machine::default,
            |mut machine| {
                machine.populate_relationships(&data, &[]).unwrap();
                machine
            },
            BatchSize::SmallInput,
        )
    });
}

fn read(c: &mut Criterion) {
    let mut machine = Machine::default();
    machine.populate_relationships(&payload(), &[]).unwrap();

    c.bench_function("read_relationship", |b| {
        b.iter(|| {
            black_box(machine.network_adapters().unwrap());
        })
    });
}

fn write(c: &mut Criterion) {
    let mut machine = Machine::default();
    let value = json!([{ "name": "IDE", "bus": "ide" }]);

    c.bench_function("set_relationship", |b| {
        b.iter(|| machine.set_storage_controllers(black_box(value.clone())).unwrap())
    });
}

criterion_group!(benches, populate, read, write);
criterion_main!(benches);
