//! Object-storage bucket avatar adapter.
//!
//! Uploads avatars to a hosted storage bucket over HTTP and returns the
//! public object URL. The key layout matches the local adapter:
//! `{user_id}/{random}.{ext}`.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::AvatarStorage;

/// HTTP adapter for a hosted avatars bucket.
pub struct BucketAvatarStorage {
    bucket_url: String,
    public_base_url: String,
    api_key: Secret<String>,
    client: reqwest::Client,
}

impl BucketAvatarStorage {
    /// Creates an adapter for the given bucket endpoint.
    pub fn new(
        bucket_url: impl Into<String>,
        public_base_url: impl Into<String>,
        api_key: Secret<String>,
    ) -> Self {
        Self {
            bucket_url: bucket_url.into(),
            public_base_url: public_base_url.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AvatarStorage for BucketAvatarStorage {
    async fn store(
        &self,
        user_id: &UserId,
        bytes: &[u8],
        extension: &str,
    ) -> Result<String, DomainError> {
        let key = format!("{}/{}.{}", user_id.as_str(), Uuid::new_v4(), extension);
        let upload_url = format!("{}/{}", self.bucket_url.trim_end_matches('/'), key);

        let response = self
            .client
            .post(&upload_url)
            .header("apikey", self.api_key.expose_secret())
            .header("content-type", content_type_for(extension))
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::StorageError,
                    format!("Avatar upload failed: {}", e),
                )
            })?;

        if !response.status().is_success() {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Avatar upload rejected with status {}", response.status()),
            ));
        }

        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            key
        ))
    }
}

fn content_type_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
