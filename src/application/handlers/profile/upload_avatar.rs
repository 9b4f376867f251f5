//! UploadAvatarHandler - stores a profile photo and records its URL.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{ProfileUpdate, UserProfile};
use crate::ports::{AvatarStorage, ProfileRepository};

/// One avatar upload.
#[derive(Debug, Clone)]
pub struct UploadAvatarCommand {
    pub user_id: UserId,
    pub bytes: Vec<u8>,
    pub extension: String,
}

/// Handler for avatar uploads.
///
/// Stores the image first, then points the profile at the new URL; a
/// failed profile write leaves at most an orphaned object behind.
pub struct UploadAvatarHandler {
    storage: Arc<dyn AvatarStorage>,
    repository: Arc<dyn ProfileRepository>,
}

impl UploadAvatarHandler {
    pub fn new(storage: Arc<dyn AvatarStorage>, repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            storage,
            repository,
        }
    }

    pub async fn handle(&self, cmd: UploadAvatarCommand) -> Result<UserProfile, DomainError> {
        let url = self
            .storage
            .store(&cmd.user_id, &cmd.bytes, &cmd.extension)
            .await?;

        let mut profile = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .unwrap_or_else(|| UserProfile::empty(cmd.user_id.clone()));

        profile.apply(ProfileUpdate {
            avatar_url: Some(url),
            ..Default::default()
        });
        self.repository.upsert(&profile).await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockProfileRepository {
        profiles: Mutex<HashMap<String, UserProfile>>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
            Ok(self.profiles.lock().unwrap().get(user_id.as_str()).cloned())
        }

        async fn upsert(&self, profile: &UserProfile) -> Result<(), DomainError> {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.user_id.as_str().to_string(), profile.clone());
            Ok(())
        }
    }

    struct MockAvatarStorage;

    #[async_trait]
    impl AvatarStorage for MockAvatarStorage {
        async fn store(
            &self,
            user_id: &UserId,
            _bytes: &[u8],
            extension: &str,
        ) -> Result<String, DomainError> {
            Ok(format!("/avatars/{}/photo.{}", user_id.as_str(), extension))
        }
    }

    #[tokio::test]
    async fn stores_avatar_and_updates_profile_url() {
        let repo = Arc::new(MockProfileRepository::default());
        let handler = UploadAvatarHandler::new(Arc::new(MockAvatarStorage), repo.clone());

        let profile = handler
            .handle(UploadAvatarCommand {
                user_id: UserId::new("user-1").unwrap(),
                bytes: vec![1, 2, 3],
                extension: "png".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(profile.avatar_url.as_deref(), Some("/avatars/user-1/photo.png"));
        let stored = repo.profiles.lock().unwrap();
        assert_eq!(
            stored.get("user-1").unwrap().avatar_url.as_deref(),
            Some("/avatars/user-1/photo.png")
        );
    }
}
