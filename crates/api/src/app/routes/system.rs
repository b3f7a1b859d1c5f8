use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::{dto::HealthResponse, errors, services::AppServices};

pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        products: services.catalog_size(),
        loaded_at: services.loaded_at().to_rfc3339(),
    })
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "no such route")
}
