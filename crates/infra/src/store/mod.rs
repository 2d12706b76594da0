//! Inventory store boundary.
//!
//! This module defines the data-access contract used by the application service and its
//! in-memory implementation. Backing storage can be swapped without touching callers.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use r#trait::{InventoryStore, StoreError};
