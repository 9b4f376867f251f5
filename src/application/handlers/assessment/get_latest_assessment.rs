//! GetLatestAssessmentHandler - the newest result driving the dashboard.

use std::sync::Arc;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentRepository;

/// Handler for fetching a user's most recent assessment.
pub struct GetLatestAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetLatestAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Option<AssessmentRecord>, DomainError> {
        self.repository.find_latest(user_id).await
    }
}
