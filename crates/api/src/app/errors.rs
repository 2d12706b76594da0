use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockpile_core::DomainError;
use stockpile_infra::store::StoreError;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(e) => domain_error_to_response(e),
        StoreError::Storage(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match err {
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::NegativeAmount(_)
        | DomainError::InvalidMetadataReference(_)
        | DomainError::InvalidInventoryReference(_)
        | DomainError::EmptyName { .. }
        | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
    };
    json_error(status, err.code(), err.to_string())
}

/// Malformed form bodies keep axum's status (415/422) but use the JSON error shape.
pub fn form_rejection_to_response(rejection: FormRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_form", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn not_found(entity: &str) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("{entity} not found"))
}

/// Parses a path identifier, mapping failures to a 400 response.
pub fn parse_id<T>(raw: &str) -> Result<T, axum::response::Response>
where
    T: core::str::FromStr<Err = DomainError>,
{
    raw.parse().map_err(domain_error_to_response)
}
