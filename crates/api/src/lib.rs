//! HTTP API: application service, routing, and request/response mapping.

pub mod app;
pub mod config;
pub mod middleware;

pub use app::services::{AppService, Services};
pub use config::{ApiConfig, ConfigError};
