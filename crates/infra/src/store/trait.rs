use std::sync::Arc;

use thiserror::Error;

use stockpile_core::{DomainError, InventoryId, ItemId, ItemMetadataId};
use stockpile_inventory::{Inventory, Item, ItemMetadata};

/// Store operation error.
///
/// Validation failures keep their domain kind (`StoreError::Domain`) so callers can tell
/// exactly which constraint failed; `Storage` covers the store itself misbehaving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// The domain error behind this failure, if it is a validation failure.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            StoreError::Domain(e) => Some(e),
            StoreError::Storage(_) => None,
        }
    }
}

/// Add/get contract for inventories, item metadata and items.
///
/// ## Write semantics
///
/// `add_*`:
/// - validates the record (value checks, then reference checks for items)
/// - assigns the next identifier when the record has none
/// - rejects a record whose explicit identifier is already taken
/// - commits atomically: the record is either fully stored or the store is unchanged
/// - returns a copy of the stored record; the caller never shares memory with the store
///
/// ## Read semantics
///
/// `get_*` returns a copy of the stored record, or `None` for an unknown identifier.
/// A lookup never fails.
pub trait InventoryStore: Send + Sync {
    fn add_item(&self, item: Item) -> Result<Item, StoreError>;

    fn get_item(&self, id: ItemId) -> Option<Item>;

    fn add_item_metadata(&self, metadata: ItemMetadata) -> Result<ItemMetadata, StoreError>;

    fn get_item_metadata(&self, id: ItemMetadataId) -> Option<ItemMetadata>;

    fn add_inventory(&self, inventory: Inventory) -> Result<Inventory, StoreError>;

    fn get_inventory(&self, id: InventoryId) -> Option<Inventory>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn add_item(&self, item: Item) -> Result<Item, StoreError> {
        (**self).add_item(item)
    }

    fn get_item(&self, id: ItemId) -> Option<Item> {
        (**self).get_item(id)
    }

    fn add_item_metadata(&self, metadata: ItemMetadata) -> Result<ItemMetadata, StoreError> {
        (**self).add_item_metadata(metadata)
    }

    fn get_item_metadata(&self, id: ItemMetadataId) -> Option<ItemMetadata> {
        (**self).get_item_metadata(id)
    }

    fn add_inventory(&self, inventory: Inventory) -> Result<Inventory, StoreError> {
        (**self).add_inventory(inventory)
    }

    fn get_inventory(&self, id: InventoryId) -> Option<Inventory> {
        (**self).get_inventory(id)
    }
}
