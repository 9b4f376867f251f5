//! User profile fields and partial updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Self-declared gender, as collected at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// Editable account profile, persisted per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Creates an empty profile for a user.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            full_name: None,
            email: None,
            phone: None,
            gender: None,
            birth_date: None,
            avatar_url: None,
            updated_at: Timestamp::now(),
        }
    }

    /// Merges a partial update; absent fields keep their current value.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(full_name) = update.full_name {
            self.full_name = Some(full_name);
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(gender) = update.gender {
            self.gender = Some(gender);
        }
        if let Some(birth_date) = update.birth_date {
            self.birth_date = Some(birth_date);
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        self.updated_at = Timestamp::now();
    }
}

/// Partial profile change; only present fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}
