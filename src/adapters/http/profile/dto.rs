//! HTTP DTOs for profile endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::user::{Gender, ProfileUpdate, UserProfile};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Partial profile update; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            gender: req.gender,
            birth_date: req.birth_date,
            avatar_url: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The user's profile as the client sees it.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub updated_at: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            full_name: profile.full_name,
            email: profile.email,
            phone: profile.phone,
            gender: profile.gender,
            birth_date: profile.birth_date,
            avatar_url: profile.avatar_url,
            updated_at: profile.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Error payload.
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
