//! HTTP routes for the catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{behavioral_catalog, values_catalog};

/// Creates the catalog router.
pub fn catalog_routes() -> Router {
    Router::new()
        .route("/behavioral", get(behavioral_catalog))
        .route("/values", get(values_catalog))
}
