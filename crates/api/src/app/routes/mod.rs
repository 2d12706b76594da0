use axum::Router;

pub mod inventory;
pub mod item_metadata;
pub mod items;
pub mod system;

/// Router for all entity endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/item-metadata", item_metadata::router())
        .nest("/items", items::router())
}
