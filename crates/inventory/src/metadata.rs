use serde::{Deserialize, Serialize};

use stockpile_core::{DomainResult, Entity, ItemMetadataId};

/// Descriptive template an item instantiates (its "kind").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub id: Option<ItemMetadataId>,
    pub name: String,
}

impl ItemMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: ItemMetadataId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

impl Entity for ItemMetadata {
    type Id = ItemMetadataId;

    const KIND: &'static str = "item metadata";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn validate(&self) -> DomainResult<()> {
        crate::ensure_name(Self::KIND, &self.name)
    }
}
