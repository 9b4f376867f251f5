//! GoTrue-style identity service adapter.
//!
//! Implements both auth ports against a hosted GoTrue-compatible service:
//!
//! - `IdentityProvider` - account operations over its REST endpoints
//! - `GoTrueSessionValidator` - local HS256 JWT validation using the
//!   project's shared secret (no network round-trip per request)
//!
//! Provider error messages are mapped to domain `AuthError` variants; the
//! localized user-facing text lives on `AuthError::user_message`.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::json;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{IdentityProvider, SessionTokens, SessionValidator, SignUpRequest};

/// Connection settings for the identity service.
#[derive(Debug, Clone)]
pub struct GoTrueConfig {
    /// Base URL of the service (no trailing slash needed).
    pub base_url: String,

    /// Public API key sent with every request.
    pub api_key: Secret<String>,

    /// Shared secret used to verify session JWTs.
    pub jwt_secret: Secret<String>,

    /// Expected audience claim in session tokens.
    pub audience: String,
}

impl GoTrueConfig {
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// REST adapter for account operations.
pub struct GoTrueIdentityProvider {
    config: GoTrueConfig,
    client: reqwest::Client,
}

impl GoTrueIdentityProvider {
    /// Creates a provider with a fresh HTTP client.
    pub fn new(config: GoTrueConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.config.endpoint(path))
            .header("apikey", self.config.api_key.expose_secret())
    }
}

#[async_trait]
impl IdentityProvider for GoTrueIdentityProvider {
    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthenticatedUser, AuthError> {
        let body = json!({
            "email": request.email.clone(),
            "password": request.password,
            "data": {
                "full_name": request.full_name.clone(),
                "phone": request.phone,
                "gender": request.gender,
                "birth_date": request.birth_date,
            },
        });

        let response = self
            .request(reqwest::Method::POST, "signup")
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let user: ProviderUser = response
            .json()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        Ok(AuthenticatedUser::new(
            UserId::new(user.id).map_err(|_| AuthError::InvalidToken)?,
            user.email.unwrap_or(request.email),
            Some(request.full_name),
            user.email_confirmed_at.is_some(),
        ))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, AuthError> {
        let response = self
            .request(reqwest::Method::POST, "token?grant_type=password")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let tokens: ProviderTokens = response
            .json()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        Ok(SessionTokens {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .request(reqwest::Method::POST, "logout")
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let response = self
            .request(reqwest::Method::POST, "recover")
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

/// Local JWT validator for session tokens.
pub struct GoTrueSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl GoTrueSessionValidator {
    /// Creates a validator from the project's shared secret.
    pub fn new(config: &GoTrueConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[config.audience.clone()]);
        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for GoTrueSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        let claims = data.claims;
        let display_name = claims
            .user_metadata
            .as_ref()
            .and_then(|m| m.get("full_name"))
            .and_then(|v| v.as_str())
            .map(ToOwned::to_owned);

        Ok(AuthenticatedUser::new(
            UserId::new(claims.sub).map_err(|_| AuthError::InvalidToken)?,
            claims.email.unwrap_or_default(),
            display_name,
            claims.email_confirmed,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<serde_json::Value>,
    #[serde(default)]
    email_confirmed: bool,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderTokens {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Maps a failed provider response onto the domain error vocabulary.
async fn error_from_response(response: reqwest::Response) -> AuthError {
    let status = response.status();
    let body: ProviderErrorBody = response.json().await.unwrap_or_default();
    let message = body
        .error_description
        .or(body.msg)
        .or(body.message)
        .unwrap_or_default();

    match message.as_str() {
        "Invalid login credentials" => AuthError::InvalidCredentials,
        "Email not confirmed" => AuthError::EmailNotConfirmed,
        "User already registered" => AuthError::AlreadyRegistered,
        _ if status.is_server_error() => AuthError::service_unavailable(message),
        _ => AuthError::InvalidCredentials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn config() -> GoTrueConfig {
        GoTrueConfig {
            base_url: "http://localhost:9999/auth/v1".to_string(),
            api_key: Secret::new("anon-key".to_string()),
            jwt_secret: Secret::new("super-secret-jwt".to_string()),
            audience: "authenticated".to_string(),
        }
    }

    fn token_for(claims: &serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[tokio::test]
    async fn validate_accepts_a_well_formed_token() {
        let validator = GoTrueSessionValidator::new(&config());
        let token = token_for(
            &json!({
                "sub": "user-123",
                "aud": "authenticated",
                "exp": future_exp(),
                "email": "maria@example.com",
                "email_confirmed": true,
                "user_metadata": { "full_name": "Maria Souza" },
            }),
            "super-secret-jwt",
        );

        let user = validator.validate(&token).await.unwrap();
        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "maria@example.com");
        assert_eq!(user.display_name.as_deref(), Some("Maria Souza"));
        assert!(user.email_verified);
    }

    #[tokio::test]
    async fn validate_rejects_a_bad_signature() {
        let validator = GoTrueSessionValidator::new(&config());
        let token = token_for(
            &json!({ "sub": "user-123", "aud": "authenticated", "exp": future_exp() }),
            "some-other-secret",
        );

        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn validate_reports_expired_tokens_distinctly() {
        let validator = GoTrueSessionValidator::new(&config());
        let token = token_for(
            &json!({
                "sub": "user-123",
                "aud": "authenticated",
                "exp": chrono::Utc::now().timestamp() - 3600,
            }),
            "super-secret-jwt",
        );

        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn validate_rejects_a_wrong_audience() {
        let validator = GoTrueSessionValidator::new(&config());
        let token = token_for(
            &json!({ "sub": "user-123", "aud": "something-else", "exp": future_exp() }),
            "super-secret-jwt",
        );

        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn endpoint_joins_paths_without_double_slashes() {
        let cfg = GoTrueConfig {
            base_url: "http://localhost:9999/auth/v1/".to_string(),
            ..config()
        };
        assert_eq!(cfg.endpoint("signup"), "http://localhost:9999/auth/v1/signup");
    }
}
