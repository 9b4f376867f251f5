//! Avatar storage configuration

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;

/// Avatar storage configuration
///
/// Either points at a remote object-storage bucket, or at a local
/// directory for development.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Object storage endpoint for the avatars bucket
    pub bucket_url: Option<String>,

    /// API key for the object storage service
    pub bucket_api_key: Option<Secret<String>>,

    /// Local directory used instead of a bucket (development)
    pub local_path: Option<String>,

    /// Public base URL prefixed to stored object keys
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl StorageConfig {
    /// True when a remote bucket is configured.
    pub fn uses_bucket(&self) -> bool {
        self.bucket_url.is_some()
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bucket_url.is_none() && self.local_path.is_none() {
            return Err(ValidationError::NoAvatarStorageConfigured);
        }
        Ok(())
    }
}

fn default_public_base_url() -> String {
    "/avatars".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_bucket_or_local_path() {
        let config = StorageConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn local_path_alone_is_enough() {
        let config = StorageConfig {
            local_path: Some("/var/avatars".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.uses_bucket());
    }

    #[test]
    fn bucket_url_alone_is_enough() {
        let config = StorageConfig {
            bucket_url: Some("https://storage.example.com/avatars".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.uses_bucket());
    }
}
