//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionValidator` and `IdentityProvider`
//! ports for use in tests, avoiding the need for a real identity service.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{IdentityProvider, SessionTokens, SessionValidator, SignUpRequest};

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return
/// `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a valid token with a simple test user derived from the ID.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).unwrap(),
            format!("{}@test.example.com", user_id),
            Some(format!("Test User {}", user_id)),
            true,
        );
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Mock identity provider with an in-memory account table.
///
/// Sign-in issues the deterministic token `"token-{email}"`.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    accounts: RwLock<HashMap<String, String>>,
}

impl MockIdentityProvider {
    /// Creates a provider with no registered accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account directly, bypassing sign-up.
    pub fn with_account(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts
            .write()
            .unwrap()
            .insert(email.into(), password.into());
        self
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthenticatedUser, AuthError> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(&request.email) {
            return Err(AuthError::AlreadyRegistered);
        }
        accounts.insert(request.email.clone(), request.password.clone());

        Ok(AuthenticatedUser::new(
            UserId::new(format!("user-{}", request.email)).unwrap(),
            request.email,
            Some(request.full_name),
            false,
        ))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, AuthError> {
        match self.accounts.read().unwrap().get(email) {
            Some(stored) if stored == password => Ok(SessionTokens {
                access_token: format!("token-{}", email),
                refresh_token: None,
            }),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        if self.accounts.read().unwrap().contains_key(email) {
            Ok(())
        } else {
            Err(AuthError::UserNotFound)
        }
    }
}
