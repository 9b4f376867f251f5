//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a session
//! token. They have no external dependencies - any identity provider can
//! populate them via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated session token.
///
/// This is a domain type with no provider dependencies.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if available.
    pub display_name: Option<String>,

    /// Whether the user's email has been confirmed by the provider.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            email_verified,
        }
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors surfaced by the identity provider.
///
/// These errors are domain-centric - they describe what went wrong from
/// the application's perspective, not the provider's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// Email/password combination was rejected by the provider.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but its email has not been confirmed yet.
    #[error("Email not confirmed")]
    EmailNotConfirmed,

    /// Sign-up attempted with an email that is already registered.
    #[error("Email already registered")]
    AlreadyRegistered,

    /// Token is valid but the user no longer exists in the system.
    #[error("User not found")]
    UserNotFound,

    /// The identity service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::UserNotFound
        )
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }

    /// Returns the localized (pt-BR) message shown to the end user.
    ///
    /// The product surfaces provider failures in Portuguese; anything not
    /// covered here falls back to a generic message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => {
                "E-mail ou senha incorretos. Por favor, tente novamente."
            }
            AuthError::EmailNotConfirmed => "Por favor, confirme seu e-mail para acessar.",
            AuthError::AlreadyRegistered => "Este e-mail já está cadastrado.",
            AuthError::InvalidToken | AuthError::TokenExpired => {
                "Sessão expirada. Entre novamente."
            }
            _ => "Não foi possível completar a operação. Tente novamente.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn authenticated_user_new_creates_user() {
        let user = AuthenticatedUser::new(
            test_user_id(),
            "test@example.com",
            Some("Test User".to_string()),
            true,
        );

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "test@example.com");
        assert!(user.email_verified);
    }

    #[test]
    fn display_name_or_email_returns_name_when_present() {
        let user = AuthenticatedUser::new(
            test_user_id(),
            "test@example.com",
            Some("Alice".to_string()),
            true,
        );

        assert_eq!(user.display_name_or_email(), "Alice");
    }

    #[test]
    fn display_name_or_email_returns_email_when_no_name() {
        let user = AuthenticatedUser::new(test_user_id(), "bob@example.com", None, true);

        assert_eq!(user.display_name_or_email(), "bob@example.com");
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::InvalidCredentials.requires_reauthentication());
        assert!(!AuthError::service_unavailable("").requires_reauthentication());
    }

    #[test]
    fn auth_error_is_transient_for_service_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
    }

    #[test]
    fn auth_error_maps_invalid_credentials_to_localized_message() {
        assert_eq!(
            AuthError::InvalidCredentials.user_message(),
            "E-mail ou senha incorretos. Por favor, tente novamente."
        );
    }

    #[test]
    fn auth_error_maps_duplicate_registration_to_localized_message() {
        assert_eq!(
            AuthError::AlreadyRegistered.user_message(),
            "Este e-mail já está cadastrado."
        );
    }
}
