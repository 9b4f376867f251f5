//! GetReportHandler - assembles the report for one stored assessment.
//!
//! Classification is recomputed on every view; only the score sets are
//! stored.

use std::sync::Arc;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, UserId};
use crate::domain::report::ProfileReport;
use crate::ports::AssessmentRepository;

/// A stored assessment with its derived report.
#[derive(Debug, Clone)]
pub struct ReportView {
    pub record: AssessmentRecord,
    pub report: ProfileReport,
}

/// Handler for building report views.
pub struct GetReportHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetReportHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        assessment_id: &AssessmentId,
        user_id: &UserId,
    ) -> Result<ReportView, DomainError> {
        let record = self
            .repository
            .find_by_id(assessment_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::AssessmentNotFound,
                    format!("Assessment not found: {}", assessment_id),
                )
            })?;

        if record.user_id != *user_id {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Assessment belongs to another user",
            ));
        }

        let report = ProfileReport::from_result(&record.result);
        Ok(ReportView { record, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AssessmentResult;
    use crate::domain::scoring::{MotivatorScores, StyleScores};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockAssessmentRepository {
        records: Mutex<Vec<AssessmentRecord>>,
    }

    impl MockAssessmentRepository {
        fn with_record(record: AssessmentRecord) -> Self {
            Self {
                records: Mutex::new(vec![record]),
            }
        }
    }

    #[async_trait]
    impl AssessmentRepository for MockAssessmentRepository {
        async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &AssessmentId,
        ) -> Result<Option<AssessmentRecord>, DomainError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == *id)
                .cloned())
        }

        async fn list_by_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<AssessmentRecord>, DomainError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn find_latest(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<AssessmentRecord>, DomainError> {
            Ok(self.records.lock().unwrap().first().cloned())
        }
    }

    fn record_for(user: &str) -> AssessmentRecord {
        use crate::domain::scoring::MotivatorFactor::*;
        use crate::domain::scoring::StyleFactor::*;

        AssessmentRecord::new(
            UserId::new(user).unwrap(),
            AssessmentResult::new(
                StyleScores::from_entries([
                    (Dominance, 60),
                    (Influence, 55),
                    (Stability, 20),
                    (Conformity, 10),
                ]),
                MotivatorScores::from_entries([
                    (Political, 80),
                    (Economic, 30),
                    (Religious, 10),
                    (Social, 20),
                    (Aesthetic, 5),
                    (Theoretical, 15),
                ]),
            ),
        )
    }

    #[tokio::test]
    async fn builds_report_for_the_owner() {
        let record = record_for("user-1");
        let id = record.id;
        let handler = GetReportHandler::new(Arc::new(MockAssessmentRepository::with_record(record)));

        let view = handler
            .handle(&id, &UserId::new("user-1").unwrap())
            .await
            .unwrap();

        assert_eq!(view.report.classification.code, "DI");
        assert_eq!(view.report.dominant_motivator_name, "Político");
    }

    #[tokio::test]
    async fn rejects_another_users_assessment() {
        let record = record_for("user-1");
        let id = record.id;
        let handler = GetReportHandler::new(Arc::new(MockAssessmentRepository::with_record(record)));

        let err = handler
            .handle(&id, &UserId::new("user-2").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn missing_assessment_is_not_found() {
        let handler = GetReportHandler::new(Arc::new(MockAssessmentRepository::with_record(
            record_for("user-1"),
        )));

        let err = handler
            .handle(&AssessmentId::new(), &UserId::new("user-1").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }
}
