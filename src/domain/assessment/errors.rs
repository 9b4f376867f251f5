//! Errors for the assessment sitting.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::RankingError;

/// Contract violations while driving a sitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The submitted order is not a complete ranking of the group.
    #[error(transparent)]
    InvalidRanking(#[from] RankingError),

    /// An untouched presentation order needs an explicit confirmation
    /// before it is scored as the user's choice.
    #[error("Confirmation required to score the unchanged order")]
    ConfirmationRequired,

    /// Advance was called for the wrong inventory phase.
    #[error("Sitting is not in the expected phase")]
    WrongPhase,

    /// The sitting already produced its result; no further input accepted.
    #[error("Sitting is already finalized")]
    AlreadyFinalized,
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let code = match &err {
            AssessmentError::InvalidRanking(_) => ErrorCode::IncompleteRanking,
            AssessmentError::ConfirmationRequired => ErrorCode::ConfirmationRequired,
            AssessmentError::WrongPhase | AssessmentError::AlreadyFinalized => {
                ErrorCode::SittingFinalized
            }
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_error_converts_with_incomplete_code() {
        let err: AssessmentError = RankingError::WrongLength {
            expected: 4,
            actual: 2,
        }
        .into();
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::IncompleteRanking);
    }

    #[test]
    fn confirmation_required_maps_to_its_code() {
        let domain: DomainError = AssessmentError::ConfirmationRequired.into();
        assert_eq!(domain.code, ErrorCode::ConfirmationRequired);
    }
}
