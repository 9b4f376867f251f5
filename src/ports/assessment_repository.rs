//! Assessment repository port.
//!
//! Defines the contract for persisting and retrieving finalized
//! assessment results. Records are immutable once saved; there is no
//! update operation by design.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{AssessmentId, DomainError, UserId};

/// Repository port for assessment result persistence.
///
/// Implementations must:
/// - Never mutate a saved record
/// - Order listings by creation time descending (newest first)
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Saves a finalized assessment record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError>;

    /// Finds one record by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, DomainError>;

    /// Lists all of a user's records, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError>;

    /// Returns the user's most recent record, if any.
    async fn find_latest(&self, user_id: &UserId) -> Result<Option<AssessmentRecord>, DomainError>;
}
