use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};

use stockpile_core::InventoryId;

use crate::app::services::Services;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_inventory))
        .route("/:id", get(get_inventory))
}

pub async fn create_inventory(
    Extension(services): Extension<Arc<Services>>,
    form: Result<Form<dto::CreateInventoryRequest>, FormRejection>,
) -> axum::response::Response {
    let Form(body) = match form {
        Ok(f) => f,
        Err(rejection) => return errors::form_rejection_to_response(rejection),
    };

    match services.create_inventory(body.name) {
        Ok(inventory) => (StatusCode::CREATED, Json(inventory)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: InventoryId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.get_inventory(id) {
        Some(inventory) => (StatusCode::OK, Json(inventory)).into_response(),
        None => errors::not_found("inventory"),
    }
}
