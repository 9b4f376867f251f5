//! The durable artifact of one completed sitting.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, Timestamp, UserId};
use crate::domain::scoring::{MotivatorScores, StyleScores};

/// Finalized scores of both inventories from one sitting.
///
/// Created at inventory completion, never mutated afterwards. Profile
/// classification is derived from these values on demand, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Behavioral style scores (D/I/S/C).
    pub disc: StyleScores,

    /// Values motivator scores (P/E/R/S/B/T).
    pub values: MotivatorScores,
}

impl AssessmentResult {
    /// Creates a result from both finalized score sets.
    pub fn new(disc: StyleScores, values: MotivatorScores) -> Self {
        Self { disc, values }
    }
}

/// A persisted assessment with its identity and creation time.
///
/// Users own many records, listed by recency descending; the newest one
/// is the "latest" result that drives the dashboard and retake policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub result: AssessmentResult,
    pub created_at: Timestamp,
}

impl AssessmentRecord {
    /// Creates a record stamped with the current time.
    pub fn new(user_id: UserId, result: AssessmentResult) -> Self {
        Self {
            id: AssessmentId::new(),
            user_id,
            result,
            created_at: Timestamp::now(),
        }
    }
}
