//! Local filesystem avatar storage.
//!
//! Development adapter: writes avatars under a base directory, organized
//! per user, and returns URLs below the configured public base. Keys are
//! randomized so a re-upload never collides with a cached older photo.
//!
//! # Directory Structure
//!
//! ```text
//! {base_path}/
//! ├── user-abc/
//! │   └── 550e8400-….png
//! └── user-xyz/
//!     └── 91f2c3d4-….jpg
//! ```

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::AvatarStorage;

/// Filesystem-backed avatar storage.
#[derive(Debug, Clone)]
pub struct LocalAvatarStorage {
    base_path: PathBuf,
    public_base_url: String,
}

impl LocalAvatarStorage {
    /// Creates storage rooted at `base_path`, serving under `public_base_url`.
    pub fn new(base_path: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl AvatarStorage for LocalAvatarStorage {
    async fn store(
        &self,
        user_id: &UserId,
        bytes: &[u8],
        extension: &str,
    ) -> Result<String, DomainError> {
        let key = format!("{}/{}.{}", user_id.as_str(), Uuid::new_v4(), extension);
        let path = self.base_path.join(&key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::new(
                    ErrorCode::StorageError,
                    format!("Failed to create avatar directory: {}", e),
                )
            })?;
        }

        fs::write(&path, bytes).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to write avatar: {}", e),
            )
        })?;

        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            key
        ))
    }
}
