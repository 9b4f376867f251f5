//! Profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;

/// Repository port for the editable user profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds a user's profile.
    ///
    /// Returns `None` when the user has not filled any profile field yet.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Inserts or replaces the user's profile.
    async fn upsert(&self, profile: &UserProfile) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProfileRepository) {}
    }
}
