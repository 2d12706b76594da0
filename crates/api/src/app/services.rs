use std::sync::Arc;

use stockpile_core::{InventoryId, ItemId, ItemMetadataId};
use stockpile_infra::store::{InMemoryInventoryStore, InventoryStore, StoreError};
use stockpile_inventory::{Inventory, Item, ItemMetadata};

/// Store handle the HTTP layer works with; any backing implementation fits behind it.
pub type SharedStore = Arc<dyn InventoryStore>;

/// Service type wired into the router.
pub type Services = AppService<SharedStore>;

/// Application service: turns caller requests into store calls.
///
/// The store is injected, so several independent instances can live in one process.
#[derive(Clone)]
pub struct AppService<S> {
    store: S,
}

impl<S: InventoryStore> AppService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_inventory(&self, name: impl Into<String>) -> Result<Inventory, StoreError> {
        self.store.add_inventory(Inventory::new(name))
    }

    pub fn get_inventory(&self, id: InventoryId) -> Option<Inventory> {
        self.store.get_inventory(id)
    }

    pub fn create_item_metadata(&self, name: impl Into<String>) -> Result<ItemMetadata, StoreError> {
        self.store.add_item_metadata(ItemMetadata::new(name))
    }

    pub fn get_item_metadata(&self, id: ItemMetadataId) -> Option<ItemMetadata> {
        self.store.get_item_metadata(id)
    }

    pub fn create_item(
        &self,
        amount: i64,
        metadata_id: Option<ItemMetadataId>,
        inventory_id: Option<InventoryId>,
    ) -> Result<Item, StoreError> {
        self.store.add_item(Item {
            id: None,
            amount,
            metadata_id,
            inventory_id,
        })
    }

    pub fn get_item(&self, id: ItemId) -> Option<Item> {
        self.store.get_item(id)
    }
}

/// In-memory wiring (dev/test): a fresh store behind the service.
pub fn build_in_memory_services() -> Services {
    let store: SharedStore = Arc::new(InMemoryInventoryStore::new());
    AppService::new(store)
}
