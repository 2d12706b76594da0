use std::collections::BTreeMap;
use std::sync::RwLock;

use stockpile_core::{
    DomainError, DomainResult, Entity, InventoryId, ItemId, ItemMetadataId, RecordId,
};
use stockpile_inventory::{Inventory, Item, ItemMetadata};

use super::r#trait::{InventoryStore, StoreError};

type Table<E> = BTreeMap<<E as Entity>::Id, E>;

#[derive(Debug, Default)]
struct Tables {
    items: Table<Item>,
    item_metadata: Table<ItemMetadata>,
    inventories: Table<Inventory>,
}

impl Tables {
    fn items(&mut self) -> &mut Table<Item> {
        &mut self.items
    }

    fn item_metadata(&mut self) -> &mut Table<ItemMetadata> {
        &mut self.item_metadata
    }

    fn inventories(&mut self) -> &mut Table<Inventory> {
        &mut self.inventories
    }

    /// Metadata is resolved before inventory; callers observe that order.
    fn check_item_references(&self, item: &Item) -> DomainResult<()> {
        match item.metadata_id {
            Some(id) if self.item_metadata.contains_key(&id) => {}
            other => return Err(DomainError::InvalidMetadataReference(other)),
        }
        match item.inventory_id {
            Some(id) if self.inventories.contains_key(&id) => {}
            other => return Err(DomainError::InvalidInventoryReference(other)),
        }
        Ok(())
    }

    fn no_references<E>(&self, _record: &E) -> DomainResult<()> {
        Ok(())
    }
}

/// In-memory inventory store.
///
/// One lock guards all three tables, so reference checks and the insert that depends on them
/// happen as a single step.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        self.tables.read().map(|t| t.items.len()).unwrap_or(0)
    }

    pub fn item_metadata_count(&self) -> usize {
        self.tables.read().map(|t| t.item_metadata.len()).unwrap_or(0)
    }

    pub fn inventory_count(&self) -> usize {
        self.tables.read().map(|t| t.inventories.len()).unwrap_or(0)
    }

    /// Next identifier for a table: one past the largest present, or `FIRST` when empty.
    ///
    /// Fails once the largest present id is the last one the id type can hold; wrapping
    /// around would reuse identifiers.
    fn next_id<E: Entity>(table: &Table<E>) -> DomainResult<E::Id> {
        match table.last_key_value() {
            None => Ok(<E::Id as RecordId>::FIRST),
            Some((last, _)) => last.next().ok_or_else(|| {
                DomainError::conflict(format!(
                    "{} identifier space exhausted after {last}",
                    E::KIND
                ))
            }),
        }
    }

    fn insert<E: Entity>(table: &mut Table<E>, mut record: E) -> DomainResult<(E::Id, E)> {
        let id = match record.id() {
            Some(id) if table.contains_key(&id) => {
                return Err(DomainError::conflict(format!(
                    "{} with id {id} already exists",
                    E::KIND
                )));
            }
            Some(id) => id,
            None => {
                let id = Self::next_id(table)?;
                record.assign_id(id);
                id
            }
        };

        table.insert(id, record.clone());
        Ok((id, record))
    }

    /// Shared write path: validate, check references, assign id, insert, hand back a copy.
    fn add<E: Entity>(
        &self,
        record: E,
        check_references: fn(&Tables, &E) -> DomainResult<()>,
        table: fn(&mut Tables) -> &mut Table<E>,
    ) -> Result<E, StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;

        let result = record
            .validate()
            .and_then(|()| check_references(&*tables, &record))
            .and_then(|()| Self::insert(table(&mut *tables), record));

        match result {
            Ok((id, stored)) => {
                tracing::debug!(kind = E::KIND, %id, "record stored");
                Ok(stored)
            }
            Err(e) => {
                tracing::warn!(kind = E::KIND, error = %e, "record rejected");
                Err(e.into())
            }
        }
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn add_item(&self, item: Item) -> Result<Item, StoreError> {
        self.add(item, Tables::check_item_references, Tables::items)
    }

    fn get_item(&self, id: ItemId) -> Option<Item> {
        let tables = self.tables.read().ok()?;
        tables.items.get(&id).cloned()
    }

    fn add_item_metadata(&self, metadata: ItemMetadata) -> Result<ItemMetadata, StoreError> {
        self.add(metadata, Tables::no_references, Tables::item_metadata)
    }

    fn get_item_metadata(&self, id: ItemMetadataId) -> Option<ItemMetadata> {
        let tables = self.tables.read().ok()?;
        tables.item_metadata.get(&id).cloned()
    }

    fn add_inventory(&self, inventory: Inventory) -> Result<Inventory, StoreError> {
        self.add(inventory, Tables::no_references, Tables::inventories)
    }

    fn get_inventory(&self, id: InventoryId) -> Option<Inventory> {
        let tables = self.tables.read().ok()?;
        tables.inventories.get(&id).cloned()
    }
}
