//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::profile::{
    GetProfileHandler, UpdateProfileCommand, UpdateProfileHandler, UploadAvatarCommand,
    UploadAvatarHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, ProfileResponse, UpdateProfileRequest};

/// Upload cap for avatar images (2 MB).
const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    get_handler: Arc<GetProfileHandler>,
    update_handler: Arc<UpdateProfileHandler>,
    avatar_handler: Arc<UploadAvatarHandler>,
}

impl ProfileHandlers {
    pub fn new(
        get_handler: Arc<GetProfileHandler>,
        update_handler: Arc<UpdateProfileHandler>,
        avatar_handler: Arc<UploadAvatarHandler>,
    ) -> Self {
        Self {
            get_handler,
            update_handler,
            avatar_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/profile - The user's profile
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.get_handler.handle(&user.id).await {
        Ok(profile) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /api/profile - Merge a partial profile update
pub async fn update_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdateProfileRequest>,
) -> Response {
    let cmd = UpdateProfileCommand {
        user_id: user.id,
        update: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(profile) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/profile/avatar - Upload a profile photo (multipart)
pub async fn upload_avatar(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    mut multipart: Multipart,
) -> Response {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("NO_FILE", "Nenhum arquivo enviado.")),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("BAD_MULTIPART", e.to_string())),
            )
                .into_response()
        }
    };

    let extension = field
        .file_name()
        .and_then(|name| name.rsplit('.').next())
        .unwrap_or("jpg")
        .to_ascii_lowercase();

    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("BAD_MULTIPART", e.to_string())),
            )
                .into_response()
        }
    };

    if bytes.len() > MAX_AVATAR_BYTES {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse::new("FILE_TOO_LARGE", "Imagem acima de 2 MB.")),
        )
            .into_response();
    }

    let cmd = UploadAvatarCommand {
        user_id: user.id,
        bytes: bytes.to_vec(),
        extension,
    };

    match handlers.avatar_handler.handle(cmd).await {
        Ok(profile) => {
            let response: ProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

fn handle_domain_error(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!(error = %error, "profile endpoint failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse::new(error.code.to_string(), error.message)),
    )
        .into_response()
}
