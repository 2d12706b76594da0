//! Infrastructure layer: storage behind the inventory store contract.

pub mod store;

pub use store::{InMemoryInventoryStore, InventoryStore, StoreError};
