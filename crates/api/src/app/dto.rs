use serde::Deserialize;

use stockpile_core::{InventoryId, ItemMetadataId};

// -------------------------
// Request DTOs (urlencoded forms)
// -------------------------

/// A missing `name` deserializes as empty and is rejected by the store.
#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemMetadataRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub amount: i64,
    pub metadata_id: Option<ItemMetadataId>,
    pub inventory_id: Option<InventoryId>,
}
