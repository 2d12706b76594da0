use axum::http::StatusCode;

pub async fn home() -> &'static str {
    "App Works!!!"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
