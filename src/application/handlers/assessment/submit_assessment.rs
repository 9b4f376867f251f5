//! SubmitAssessmentHandler - replays a completed sitting and persists it.
//!
//! The interaction layer gathers one ranking per group (item positions
//! relative to the catalog order) and submits the whole sitting at once.
//! The handler replays the rankings through the sitting fold, finalizes,
//! and saves best-effort: a failed save still returns the computed result
//! so the user sees their report.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentRecord, IdentityShuffle, Sitting};
use crate::domain::catalog::{DNA_ADJECTIVE_GROUPS, VALUES_GROUPS};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::scoring::{Factor, Ranking};
use crate::ports::AssessmentRepository;

/// One completed sitting: ten behavioral and ten values rankings.
///
/// Each inner vector lists catalog item positions, most identified first.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user_id: UserId,
    pub behavioral_rankings: Vec<Vec<usize>>,
    pub values_rankings: Vec<Vec<usize>>,
}

/// Outcome of a submission.
///
/// `persisted` is false when the save failed; the record is still the
/// authoritative result for the current sitting's report.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub record: AssessmentRecord,
    pub persisted: bool,
}

/// Handler for submitting completed sittings.
pub struct SubmitAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl SubmitAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        if cmd.behavioral_rankings.len() != DNA_ADJECTIVE_GROUPS.len() {
            return Err(ranking_count_error(
                "behavioral",
                DNA_ADJECTIVE_GROUPS.len(),
                cmd.behavioral_rankings.len(),
            ));
        }
        if cmd.values_rankings.len() != VALUES_GROUPS.len() {
            return Err(ranking_count_error(
                "values",
                VALUES_GROUPS.len(),
                cmd.values_rankings.len(),
            ));
        }

        // Replay against catalog order; the interaction layer already
        // collected the keep-this-order confirmations.
        let mut sitting = Sitting::new(&mut IdentityShuffle);
        sitting.begin().map_err(DomainError::from)?;

        for (index, positions) in cmd.behavioral_rankings.iter().enumerate() {
            let order = positions_to_factors(positions, &DNA_ADJECTIVE_GROUPS[index].factors())?;
            let ranking = Ranking::try_new(order)
                .map_err(|e| DomainError::new(ErrorCode::IncompleteRanking, e.to_string()))?;
            sitting
                .advance_behavioral(ranking, true)
                .map_err(DomainError::from)?;
        }

        for (index, positions) in cmd.values_rankings.iter().enumerate() {
            let order = positions_to_factors(positions, &VALUES_GROUPS[index].factors())?;
            let ranking = Ranking::try_new(order)
                .map_err(|e| DomainError::new(ErrorCode::IncompleteRanking, e.to_string()))?;
            sitting
                .advance_values(ranking, true)
                .map_err(DomainError::from)?;
        }

        let result = sitting
            .result()
            .cloned()
            .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "Sitting did not finalize"))?;

        let record = AssessmentRecord::new(cmd.user_id, result);

        // Best-effort persistence: the report is shown either way.
        let persisted = match self.repository.save(&record).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "assessment save failed; returning unpersisted result");
                false
            }
        };

        Ok(SubmitAssessmentResult { record, persisted })
    }
}

fn positions_to_factors<F: Factor>(
    positions: &[usize],
    group_factors: &[F],
) -> Result<Vec<F>, DomainError> {
    positions
        .iter()
        .map(|position| {
            group_factors.get(*position).copied().ok_or_else(|| {
                DomainError::new(
                    ErrorCode::IncompleteRanking,
                    format!("Item position {} is outside the group", position),
                )
            })
        })
        .collect()
}

fn ranking_count_error(inventory: &str, expected: usize, actual: usize) -> DomainError {
    DomainError::new(
        ErrorCode::IncompleteRanking,
        format!(
            "Expected {} {} rankings, got {}",
            expected, inventory, actual
        ),
    )
}
