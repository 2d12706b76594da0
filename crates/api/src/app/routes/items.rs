use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};

use stockpile_core::ItemId;

use crate::app::services::Services;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_item))
        .route("/:id", get(get_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<Services>>,
    form: Result<Form<dto::CreateItemRequest>, FormRejection>,
) -> axum::response::Response {
    let Form(body) = match form {
        Ok(f) => f,
        Err(rejection) => return errors::form_rejection_to_response(rejection),
    };

    match services.create_item(body.amount, body.metadata_id, body.inventory_id) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.get_item(id) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::not_found("item"),
    }
}
