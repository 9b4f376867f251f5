//! Dominant profile derivation from behavioral scores.

use crate::domain::scoring::{Factor, StyleFactor, StyleScores};

/// A factor scoring at or above this is "high" and joins the profile code.
pub const HIGH_FACTOR_THRESHOLD: u8 = 51;

/// The dominant profile derived from one set of behavioral scores.
///
/// `factors` is never empty: when no factor reaches the threshold the
/// single highest-scoring factor stands in. `code` concatenates the
/// letters in descending-score order (ties keep catalog order), e.g.
/// "DI" for a high-D, high-I profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileClassification {
    pub factors: Vec<StyleFactor>,
    pub code: String,
}

impl ProfileClassification {
    /// Returns the strongest factor.
    pub fn primary(&self) -> StyleFactor {
        self.factors[0]
    }

    /// Returns the ordered top-two pair when at least two factors are high.
    ///
    /// The pair is ordered by score; "DI" and "ID" select different
    /// narrative entries.
    pub fn top_pair(&self) -> Option<(StyleFactor, StyleFactor)> {
        if self.factors.len() >= 2 {
            Some((self.factors[0], self.factors[1]))
        } else {
            None
        }
    }
}

/// Classifies finalized behavioral scores into the dominant profile.
pub fn classify(disc: &StyleScores) -> ProfileClassification {
    let ranked = disc.ranked();

    let mut factors: Vec<StyleFactor> = ranked
        .iter()
        .filter(|(_, score)| *score >= HIGH_FACTOR_THRESHOLD)
        .map(|(factor, _)| *factor)
        .collect();

    if factors.is_empty() {
        factors.push(ranked[0].0);
    }

    let code = factors.iter().map(|f| f.letter()).collect();

    ProfileClassification { factors, code }
}
