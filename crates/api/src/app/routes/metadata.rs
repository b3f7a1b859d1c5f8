use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/price-range", get(price_range))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    errors::json_ok(services.categories())
}

pub async fn price_range(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.price_range() {
        Ok(range) => errors::json_ok(range),
        Err(e) => errors::domain_error_to_response(e),
    }
}
