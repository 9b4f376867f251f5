//! ListAssessmentsHandler - a user's report history, newest first.

use std::sync::Arc;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentRepository;

/// Handler for listing a user's assessments.
pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError> {
        self.repository.list_by_user(user_id).await
    }
}
