use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, Entity, InventoryId, ItemId, ItemMetadataId};

/// A quantity of one metadata kind held in one inventory.
///
/// `metadata_id` and `inventory_id` are optional so an incomplete request can be represented
/// and rejected with a precise error; a stored item always has both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<ItemId>,
    pub amount: i64,
    pub metadata_id: Option<ItemMetadataId>,
    pub inventory_id: Option<InventoryId>,
}

impl Item {
    pub fn new(amount: i64, metadata_id: ItemMetadataId, inventory_id: InventoryId) -> Self {
        Self {
            id: None,
            amount,
            metadata_id: Some(metadata_id),
            inventory_id: Some(inventory_id),
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    const KIND: &'static str = "item";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    /// Only the amount can be checked here; references are resolved by the store.
    fn validate(&self) -> DomainResult<()> {
        if self.amount < 0 {
            return Err(DomainError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}
