//! HTTP routes for account endpoints.

use axum::{routing::post, Router};

use super::handlers::{reset_password, sign_in, sign_out, sign_up, AuthHandlers};

/// Creates the account router with all endpoints.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/signout", post(sign_out))
        .route("/reset-password", post(reset_password))
        .with_state(handlers)
}
