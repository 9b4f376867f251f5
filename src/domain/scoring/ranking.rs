//! User-produced total order over one group's items.

use thiserror::Error;

use super::factor::Factor;

/// Errors raised when a ranking is not a valid total order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("Ranking has {actual} positions, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Ranking repeats a factor; every item must appear exactly once")]
    DuplicateFactor,
}

/// A total order over one group's items, most-identified-with first.
///
/// Because every group covers each factor of its inventory exactly once,
/// a ranking is equivalently a permutation of the factor set. Partial
/// orders are rejected at construction; scoring never sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking<F: Factor> {
    order: Vec<F>,
}

impl<F: Factor> Ranking<F> {
    /// Builds a ranking from the chosen order, validating completeness.
    pub fn try_new(order: Vec<F>) -> Result<Self, RankingError> {
        if order.len() != F::ALL.len() {
            return Err(RankingError::WrongLength {
                expected: F::ALL.len(),
                actual: order.len(),
            });
        }
        for factor in F::ALL {
            if !order.contains(factor) {
                return Err(RankingError::DuplicateFactor);
            }
        }
        Ok(Self { order })
    }

    /// Iterates factors from most to least identified.
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.order.iter()
    }

    /// Returns the ranked order as a slice.
    pub fn as_slice(&self) -> &[F] {
        &self.order
    }
}
