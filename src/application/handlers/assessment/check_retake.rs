//! CheckRetakeHandler - evaluates the six-month retake policy.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::report::{RetakeEligibility, RetakePolicy};
use crate::ports::AssessmentRepository;

/// Handler for the retake eligibility check.
pub struct CheckRetakeHandler {
    repository: Arc<dyn AssessmentRepository>,
    policy: RetakePolicy,
}

impl CheckRetakeHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self {
            repository,
            policy: RetakePolicy::default(),
        }
    }

    pub fn with_policy(repository: Arc<dyn AssessmentRepository>, policy: RetakePolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<RetakeEligibility, DomainError> {
        let latest = self.repository.find_latest(user_id).await?;
        let now = Timestamp::now();
        Ok(self
            .policy
            .evaluate(latest.as_ref().map(|r| &r.created_at), &now))
    }
}
