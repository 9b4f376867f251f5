//! Dominant motivator selection.

use crate::domain::scoring::{Factor, MotivatorFactor, MotivatorScores};

/// Picks the highest-scoring values factor.
///
/// Ties are broken by the fixed factor-priority order P, E, R, S, B, T:
/// the scan visits factors in that order and a later factor must score
/// strictly higher to win. (The ordering is a deliberate rule, not an
/// artifact of storage order.)
pub fn select_motivator(values: &MotivatorScores) -> MotivatorFactor {
    let mut best = MotivatorFactor::ALL[0];
    let mut best_score = values.get(best);

    for factor in &MotivatorFactor::ALL[1..] {
        let score = values.get(*factor);
        if score > best_score {
            best = *factor;
            best_score = score;
        }
    }

    best
}
