//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::AuthError;
use crate::ports::{IdentityProvider, SignUpRequest as SignUpCommand};

use super::dto::{
    ErrorResponse, ResetPasswordRequest, SessionResponse, SignInRequest, SignUpRequest,
    SignUpResponse,
};

/// Special characters accepted by the password policy.
const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthHandlers {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/signup - Create an account
pub async fn sign_up(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<SignUpRequest>,
) -> Response {
    if !password_meets_policy(&req.password) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "WEAK_PASSWORD",
                "A senha não atende aos requisitos mínimos de segurança.",
            )),
        )
            .into_response();
    }
    if req.password != req.confirm_password {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "PASSWORD_MISMATCH",
                "As senhas não coincidem.",
            )),
        )
            .into_response();
    }

    let command = SignUpCommand {
        email: req.email,
        password: req.password,
        full_name: req.full_name,
        phone: req.phone,
        gender: req.gender,
        birth_date: req.birth_date,
    };

    match handlers.provider.sign_up(command).await {
        Ok(user) => {
            let response = SignUpResponse {
                user_id: user.id.to_string(),
                email: user.email,
                message: "Conta criada. Confirme seu e-mail para acessar.".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => auth_error_response(e),
    }
}

/// POST /api/auth/signin - Exchange credentials for session tokens
pub async fn sign_in(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<SignInRequest>,
) -> Response {
    match handlers.provider.sign_in(&req.email, &req.password).await {
        Ok(tokens) => {
            let response = SessionResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => auth_error_response(e),
    }
}

/// POST /api/auth/signout - Revoke the current session
pub async fn sign_out(State(handlers): State<AuthHandlers>, headers: HeaderMap) -> Response {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match handlers.provider.sign_out(token).await {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(e) => auth_error_response(e),
        },
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("UNAUTHENTICATED", "Sessão ausente.")),
        )
            .into_response(),
    }
}

/// POST /api/auth/reset-password - Send a password-reset email
pub async fn reset_password(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<ResetPasswordRequest>,
) -> Response {
    match handlers.provider.reset_password(&req.email).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "E-mail de recuperação enviado! Verifique sua caixa de entrada."
            })),
        )
            .into_response(),
        Err(e) => auth_error_response(e),
    }
}

/// The sign-up password policy: at least 8 characters, one uppercase
/// letter, and one special character.
fn password_meets_policy(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

fn auth_error_response(error: AuthError) -> Response {
    let status = match &error {
        AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::TokenExpired => {
            StatusCode::UNAUTHORIZED
        }
        AuthError::EmailNotConfirmed => StatusCode::FORBIDDEN,
        AuthError::AlreadyRegistered => StatusCode::CONFLICT,
        AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(ErrorResponse::new("AUTH_ERROR", error.user_message())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_policy_requires_length_upper_and_special() {
        assert!(password_meets_policy("Segura#123"));
        assert!(!password_meets_policy("curta#A"));
        assert!(!password_meets_policy("semmaiuscula#1"));
        assert!(!password_meets_policy("SemEspecial123"));
    }

    #[test]
    fn all_documented_specials_count() {
        for special in PASSWORD_SPECIALS.chars() {
            let password = format!("Abcdefg{}", special);
            assert!(password_meets_policy(&password), "rejected {}", special);
        }
    }
}
