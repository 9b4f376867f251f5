//! HTTP routes for profile endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{get_profile, update_profile, upload_avatar, ProfileHandlers};

/// Creates the profile router with all endpoints.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", get(get_profile))
        .route("/", put(update_profile))
        .route("/avatar", post(upload_avatar))
        .with_state(handlers)
}
