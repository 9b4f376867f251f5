//! HTTP DTOs for account endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::user::Gender;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create an account.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub password: String,
    pub confirm_password: String,
}

/// Request to sign in with email/password.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Request to send a password-reset email.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response after a successful sign-up.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub user_id: String,
    pub email: String,
    pub message: String,
}

/// Session tokens issued at sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Error payload with a localized user-facing message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
