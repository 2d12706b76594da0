//! Domain error model.

use thiserror::Error;

use crate::id::{InventoryId, ItemMetadataId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a caller-input failure and carries the offending value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item amount was below zero.
    #[error("item amount {0} cannot be negative")]
    NegativeAmount(i64),

    /// An item's metadata_id was unset or did not resolve.
    #[error("cannot add item with invalid metadata_id {}", display_ref(.0))]
    InvalidMetadataReference(Option<ItemMetadataId>),

    /// An item's inventory_id was unset or did not resolve.
    #[error("cannot add item with invalid inventory_id {}", display_ref(.0))]
    InvalidInventoryReference(Option<InventoryId>),

    /// A named record had an empty name.
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A record with the supplied identifier already exists.
    #[error("conflict: {0}")]
    Conflict(String),
}

fn display_ref<T: core::fmt::Display>(id: &Option<T>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "<unset>".to_string(),
    }
}

impl DomainError {
    pub fn empty_name(entity: &'static str) -> Self {
        Self::EmptyName { entity }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NegativeAmount(_) => "negative_amount",
            Self::InvalidMetadataReference(_) => "invalid_metadata_reference",
            Self::InvalidInventoryReference(_) => "invalid_inventory_reference",
            Self::EmptyName { .. } => "empty_name",
            Self::InvalidId(_) => "invalid_id",
            Self::Conflict(_) => "conflict",
        }
    }
}
