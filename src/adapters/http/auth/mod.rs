//! HTTP adapter for account endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, ResetPasswordRequest, SessionResponse, SignInRequest, SignUpRequest,
    SignUpResponse,
};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
