use axum::Router;

pub mod metadata;
pub mod products;
pub mod system;

/// Router for the catalog endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/products-metadata", metadata::router())
}
