//! Avatar storage port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Object storage for profile photos.
///
/// Implementations store the image under a per-user key and return the
/// public URL the profile records.
#[async_trait]
pub trait AvatarStorage: Send + Sync {
    /// Stores image bytes for a user, returning the public URL.
    ///
    /// The extension comes from the uploaded file name (e.g. "png").
    ///
    /// # Errors
    ///
    /// - `StorageError` when the object cannot be written
    async fn store(
        &self,
        user_id: &UserId,
        bytes: &[u8],
        extension: &str,
    ) -> Result<String, DomainError>;
}
