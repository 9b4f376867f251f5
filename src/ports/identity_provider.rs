//! Identity provider port for account operations.
//!
//! The core consumes authentication only as "active session -> user id"
//! (see `SessionValidator`); this port covers the account lifecycle the
//! presentation layer drives: sign-up, sign-in, sign-out, and
//! password-reset-by-email.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::user::Gender;

/// New-account request with the profile metadata collected at sign-up.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
}

/// Session tokens issued on successful sign-in.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Account operations against the external identity service.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::AlreadyRegistered` for duplicate sign-ups
/// - Return `AuthError::InvalidCredentials` for bad email/password
/// - Return `AuthError::EmailNotConfirmed` for unconfirmed accounts
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Registers a new account, attaching the profile metadata.
    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthenticatedUser, AuthError>;

    /// Exchanges email/password for session tokens.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, AuthError>;

    /// Revokes the session behind an access token.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Sends a password-reset link to the given email.
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
}
