//! Integration tests for the assessment flow.
//!
//! Drives the full path a sitting takes through the application layer:
//! submit rankings, read the history and latest result back, assemble the
//! report, and evaluate retake eligibility - all against an in-memory
//! repository.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use dna_assessment::application::handlers::assessment::{
    CheckRetakeHandler, GetLatestAssessmentHandler, GetReportHandler, ListAssessmentsHandler,
    SubmitAssessmentCommand, SubmitAssessmentHandler,
};
use dna_assessment::domain::assessment::AssessmentRecord;
use dna_assessment::domain::catalog::{DNA_ADJECTIVE_GROUPS, VALUES_GROUPS};
use dna_assessment::domain::foundation::{AssessmentId, DomainError, UserId};
use dna_assessment::domain::scoring::{Factor, MotivatorFactor, StyleFactor};
use dna_assessment::ports::AssessmentRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory assessment repository.
#[derive(Default)]
struct InMemoryAssessmentRepository {
    records: Mutex<Vec<AssessmentRecord>>,
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError> {
        let mut records: Vec<AssessmentRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn find_latest(&self, user_id: &UserId) -> Result<Option<AssessmentRecord>, DomainError> {
        Ok(self.list_by_user(user_id).await?.into_iter().next())
    }
}

fn user() -> UserId {
    UserId::new("integration-user").unwrap()
}

/// For each behavioral group, the positions that rank its items D, I, S, C.
fn behavioral_rankings_preferring_disc_order() -> Vec<Vec<usize>> {
    DNA_ADJECTIVE_GROUPS
        .iter()
        .map(|group| {
            let factors = group.factors();
            StyleFactor::ALL
                .iter()
                .map(|wanted| {
                    factors
                        .iter()
                        .position(|f| f == wanted)
                        .expect("group covers every factor")
                })
                .collect()
        })
        .collect()
}

/// For each values group, the positions that rank its items P, E, R, S, B, T.
fn values_rankings_preferring_priority_order() -> Vec<Vec<usize>> {
    VALUES_GROUPS
        .iter()
        .map(|group| {
            let factors = group.factors();
            MotivatorFactor::ALL
                .iter()
                .map(|wanted| {
                    factors
                        .iter()
                        .position(|f| f == wanted)
                        .expect("group covers every factor")
                })
                .collect()
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_sitting_flows_from_submit_to_report_and_retake() {
    let repository = Arc::new(InMemoryAssessmentRepository::default());

    let submit = SubmitAssessmentHandler::new(repository.clone());
    let list = ListAssessmentsHandler::new(repository.clone());
    let latest = GetLatestAssessmentHandler::new(repository.clone());
    let report = GetReportHandler::new(repository.clone());
    let retake = CheckRetakeHandler::new(repository.clone());

    // Submit a sitting that consistently prefers D, then I, then S, then C,
    // and P through T in priority order for the values inventory.
    let submitted = submit
        .handle(SubmitAssessmentCommand {
            user_id: user(),
            behavioral_rankings: behavioral_rankings_preferring_disc_order(),
            values_rankings: values_rankings_preferring_priority_order(),
        })
        .await
        .unwrap();

    assert!(submitted.persisted);
    let disc = &submitted.record.result.disc;
    assert_eq!(disc.get(StyleFactor::Dominance), 96);
    assert_eq!(disc.get(StyleFactor::Influence), 64);
    assert_eq!(disc.get(StyleFactor::Stability), 30);
    assert_eq!(disc.get(StyleFactor::Conformity), 10);

    let values = &submitted.record.result.values;
    assert_eq!(values.get(MotivatorFactor::Political), 100);
    assert_eq!(values.get(MotivatorFactor::Theoretical), 10);

    // History and latest agree on the stored record.
    let history = list.handle(&user()).await.unwrap();
    assert_eq!(history.len(), 1);
    let newest = latest.handle(&user()).await.unwrap().unwrap();
    assert_eq!(newest.id, submitted.record.id);

    // The derived report classifies the profile and picks the motivator.
    let view = report.handle(&submitted.record.id, &user()).await.unwrap();
    assert_eq!(view.report.classification.code, "DI");
    assert_eq!(view.report.profile_name, "Dominante - Influente");
    assert_eq!(view.report.dominant_motivator_name, "Político");
    assert!(!view.report.description.is_empty());

    // A sitting from just now blocks the retake for roughly six months.
    let eligibility = retake.handle(&user()).await.unwrap();
    assert!(!eligibility.allowed);
    assert!(eligibility.days_remaining > 150);
}

#[tokio::test]
async fn histories_are_isolated_per_user() {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let submit = SubmitAssessmentHandler::new(repository.clone());
    let list = ListAssessmentsHandler::new(repository.clone());

    submit
        .handle(SubmitAssessmentCommand {
            user_id: user(),
            behavioral_rankings: behavioral_rankings_preferring_disc_order(),
            values_rankings: values_rankings_preferring_priority_order(),
        })
        .await
        .unwrap();

    let other = UserId::new("someone-else").unwrap();
    assert!(list.handle(&other).await.unwrap().is_empty());
}

#[tokio::test]
async fn report_is_recomputed_not_stored() {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let submit = SubmitAssessmentHandler::new(repository.clone());
    let report = GetReportHandler::new(repository.clone());

    let submitted = submit
        .handle(SubmitAssessmentCommand {
            user_id: user(),
            behavioral_rankings: behavioral_rankings_preferring_disc_order(),
            values_rankings: values_rankings_preferring_priority_order(),
        })
        .await
        .unwrap();

    // Two views derive identical reports from the same stored scores.
    let first = report.handle(&submitted.record.id, &user()).await.unwrap();
    let second = report.handle(&submitted.record.id, &user()).await.unwrap();
    assert_eq!(first.report, second.report);
}
