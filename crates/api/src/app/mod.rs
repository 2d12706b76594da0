//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the application service in front of the inventory store
//! - `routes/`: HTTP routes + handlers (one file per entity)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around an already-wired service.
pub fn build_app(services: Arc<services::Services>) -> Router {
    Router::new()
        .route("/", get(routes::system::home))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(services)),
        )
}

/// Build the router backed by a fresh in-memory store (public entrypoint used by `main.rs`).
pub fn build_default_app() -> Router {
    build_app(Arc::new(services::build_in_memory_services()))
}
