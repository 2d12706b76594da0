use serde::{Deserialize, Serialize};

use stockpile_core::{DomainResult, Entity, InventoryId};

/// A named container that items belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: Option<InventoryId>,
    pub name: String,
}

impl Inventory {
    /// New inventory without an identifier (the store assigns one).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: InventoryId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

impl Entity for Inventory {
    type Id = InventoryId;

    const KIND: &'static str = "inventory";

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
