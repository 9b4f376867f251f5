//! UpdateProfileHandler - merges a partial profile change.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{ProfileUpdate, UserProfile};
use crate::ports::ProfileRepository;

/// A partial profile change for one user.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub update: ProfileUpdate,
}

/// Handler for profile updates.
pub struct UpdateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UserProfile, DomainError> {
        let mut profile = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .unwrap_or_else(|| UserProfile::empty(cmd.user_id.clone()));

        profile.apply(cmd.update);
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

    #[tokio::test]
    async fn creates_profile_on_first_update() {
        let repo = Arc::new(MockProfileRepository::default());
        let handler = UpdateProfileHandler::new(repo.clone());

        let profile = handler
            .handle(UpdateProfileCommand {
                user_id: UserId::new("user-1").unwrap(),
                update: ProfileUpdate {
                    full_name: Some("Maria Souza".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(profile.full_name.as_deref(), Some("Maria Souza"));
        assert!(repo.profiles.lock().unwrap().contains_key("user-1"));
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let repo = Arc::new(MockProfileRepository::default());
        let handler = UpdateProfileHandler::new(repo);

        let user_id = UserId::new("user-1").unwrap();
        handler
            .handle(UpdateProfileCommand {
                user_id: user_id.clone(),
                update: ProfileUpdate {
                    full_name: Some("Maria Souza".to_string()),
                    phone: Some("(11) 99999-9999".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let profile = handler
            .handle(UpdateProfileCommand {
                user_id,
                update: ProfileUpdate {
                    phone: Some("(21) 88888-8888".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(profile.full_name.as_deref(), Some("Maria Souza"));
        assert_eq!(profile.phone.as_deref(), Some("(21) 88888-8888"));
    }
}
