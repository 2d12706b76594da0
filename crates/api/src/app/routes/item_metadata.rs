use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};

use stockpile_core::ItemMetadataId;

use crate::app::services::Services;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_item_metadata))
        .route("/:id", get(get_item_metadata))
}

pub async fn create_item_metadata(
    Extension(services): Extension<Arc<Services>>,
    form: Result<Form<dto::CreateItemMetadataRequest>, FormRejection>,
) -> axum::response::Response {
    let Form(body) = match form {
        Ok(f) => f,
        Err(rejection) => return errors::form_rejection_to_response(rejection),
    };

    match services.create_item_metadata(body.name) {
        Ok(metadata) => (StatusCode::CREATED, Json(metadata)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_item_metadata(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemMetadataId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.get_item_metadata(id) {
        Some(metadata) => (StatusCode::OK, Json(metadata)).into_response(),
        None => errors::not_found("item metadata"),
    }
}
