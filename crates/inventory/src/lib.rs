//! Inventory domain module.
//!
//! Plain records for inventories, item metadata and items, plus the checks each record can
//! make on its own (no IO, no HTTP, no storage).

pub mod inventory;
pub mod item;
pub mod metadata;

pub use inventory::Inventory;
pub use item::Item;
pub use metadata::ItemMetadata;

use stockpile_core::{DomainError, DomainResult};

/// Rejects empty names for the given entity kind.
pub(crate) fn ensure_name(entity: &'static str, name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::empty_name(entity));
    }
    Ok(())
}
