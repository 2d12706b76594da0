use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockpile_core::{InventoryId, ItemId, ItemMetadataId};
use stockpile_infra::store::{InMemoryInventoryStore, InventoryStore};
use stockpile_inventory::{Inventory, Item, ItemMetadata};

fn seeded_store() -> InMemoryInventoryStore {
    let store = InMemoryInventoryStore::new();
    store
        .add_inventory(Inventory::new("Warehouse"))
        .expect("seed inventory");
    store
        .add_item_metadata(ItemMetadata::new("Widget"))
        .expect("seed metadata");
    store
}

fn widget(amount: i64) -> Item {
    Item::new(amount, ItemMetadataId::new(0), InventoryId::new(0))
}

fn bench_add_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_item");

    for size in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let store = seeded_store();
                for n in 0..size {
                    store.add_item(widget(n as i64)).expect("valid item");
                }
                black_box(store.item_count())
            });
        });
    }

    group.finish();
}

fn bench_get_item(c: &mut Criterion) {
    let store = seeded_store();
    for n in 0..10_000 {
        store.add_item(widget(n)).expect("valid item");
    }

    c.bench_function("get_item/hit", |b| {
        b.iter(|| black_box(store.get_item(ItemId::new(black_box(5_000)))))
    });

    c.bench_function("get_item/miss", |b| {
        b.iter(|| black_box(store.get_item(ItemId::new(black_box(50_000)))))
    });
}

fn bench_rejected_write(c: &mut Criterion) {
    let store = InMemoryInventoryStore::new();

    c.bench_function("add_item/unresolved_reference", |b| {
        b.iter(|| black_box(store.add_item(widget(1)).is_err()))
    });
}

criterion_group!(benches, bench_add_item, bench_get_item, bench_rejected_write);
criterion_main!(benches);
