//! GetProfileHandler - reads the user's profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;
use crate::ports::ProfileRepository;

/// Handler for fetching a user's profile.
///
/// A user who never filled any field still gets an empty profile back;
/// the presentation layer treats both cases the same.
pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<UserProfile, DomainError> {
        Ok(self
            .repository
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| UserProfile::empty(user_id.clone())))
    }
}
