// src/catalog/routes.rs

use axum::{middleware, routing::get, Router};
use rest_envelope::paging::{paging_middleware_with, PagingOptions};

use super::handlers;

/// Create the catalogue router
pub fn catalog_routes(paging: PagingOptions) -> Router {
    Router::new()
        .route(
            "/api/items",
            get(handlers::list_items)
                .layer(middleware::from_fn_with_state(paging, paging_middleware_with))
                .post(handlers::create_item),
        )
        .route("/api/items/:id", get(handlers::get_item))
        .route("/api/health", get(handlers::health))
        .route("/api/boom", get(handlers::boom))
}
