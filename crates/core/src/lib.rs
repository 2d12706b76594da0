//! `stockpile-core`: shared building blocks for the inventory store.
//!
//! This crate contains **pure domain** primitives (no storage, no HTTP).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InventoryId, ItemId, ItemMetadataId, RecordId};
