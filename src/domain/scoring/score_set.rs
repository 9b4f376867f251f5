//! Accumulated and finalized factor scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::factor::{Factor, MotivatorFactor, StyleFactor};

/// Fractional score accumulator for one inventory.
///
/// Initialized all-zero at inventory start and mutated additively once per
/// group as each ranking is consumed. Intermediate totals stay fractional;
/// rounding happens exactly once, in [`ScoreSet::finalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSet<F: Factor> {
    totals: BTreeMap<F, f64>,
}

impl<F: Factor> ScoreSet<F> {
    /// Creates an all-zero accumulator covering every factor.
    pub fn zeroed() -> Self {
        Self {
            totals: F::ALL.iter().map(|f| (*f, 0.0)).collect(),
        }
    }

    /// Returns the accumulated fractional total for a factor.
    pub fn get(&self, factor: F) -> f64 {
        self.totals.get(&factor).copied().unwrap_or(0.0)
    }

    /// Adds points to a factor's total.
    pub fn add(&mut self, factor: F, points: f64) {
        *self.totals.entry(factor).or_insert(0.0) += points;
    }

    /// Returns the sum of all factor totals.
    pub fn sum(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Rounds each factor total half away from zero, independently.
    ///
    /// Pure function: calling it twice on the same accumulator yields the
    /// same result. The finalized scores are independent intensity values,
    /// not a normalized distribution.
    pub fn finalize(&self) -> FinalScores<F> {
        FinalScores {
            scores: self
                .totals
                .iter()
                .map(|(f, total)| (*f, total.round() as u8))
                .collect(),
        }
    }
}

impl<F: Factor> Default for ScoreSet<F> {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Finalized integer scores for one inventory, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalScores<F: Factor> {
    scores: BTreeMap<F, u8>,
}

/// Finalized behavioral style scores (4 factors).
pub type StyleScores = FinalScores<StyleFactor>;

/// Finalized values motivator scores (6 factors).
pub type MotivatorScores = FinalScores<MotivatorFactor>;

impl<F: Factor> FinalScores<F> {
    /// Builds finalized scores from explicit per-factor values.
    ///
    /// Factors absent from `entries` score zero.
    pub fn from_entries(entries: impl IntoIterator<Item = (F, u8)>) -> Self {
        let mut scores: BTreeMap<F, u8> = F::ALL.iter().map(|f| (*f, 0)).collect();
        for (factor, score) in entries {
            scores.insert(factor, score);
        }
        Self { scores }
    }

    /// Returns the finalized score for a factor.
    pub fn get(&self, factor: F) -> u8 {
        self.scores.get(&factor).copied().unwrap_or(0)
    }

    /// Iterates factors with their scores in catalog priority order.
    pub fn iter(&self) -> impl Iterator<Item = (F, u8)> + '_ {
        F::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    /// Returns factors sorted descending by score.
    ///
    /// The sort is stable: equal scores keep catalog priority order.
    pub fn ranked(&self) -> Vec<(F, u8)> {
        let mut entries: Vec<(F, u8)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::StyleFactor::*;

    #[test]
    fn zeroed_covers_every_factor_with_zero() {
        let scores = ScoreSet::<StyleFactor>::zeroed();
        for factor in StyleFactor::ALL {
            assert_eq!(scores.get(*factor), 0.0);
        }
    }

    #[test]
    fn add_accumulates_fractional_points() {
        let mut scores = ScoreSet::<StyleFactor>::zeroed();
        scores.add(Dominance, 9.6);
        scores.add(Dominance, 9.6);
        assert!((scores.get(Dominance) - 19.2).abs() < 1e-9);
    }

    #[test]
    fn finalize_rounds_half_away_from_zero() {
        let mut scores = ScoreSet::<StyleFactor>::zeroed();
        scores.add(Dominance, 9.6);
        scores.add(Influence, 6.4);
        scores.add(Stability, 3.5);

        let finalized = scores.finalize();
        assert_eq!(finalized.get(Dominance), 10);
        assert_eq!(finalized.get(Influence), 6);
        assert_eq!(finalized.get(Stability), 4);
        assert_eq!(finalized.get(Conformity), 0);
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut scores = ScoreSet::<StyleFactor>::zeroed();
        scores.add(Dominance, 47.9);
        scores.add(Influence, 12.2);

        assert_eq!(scores.finalize(), scores.finalize());
    }

    #[test]
    fn ranked_sorts_descending_with_stable_tie_order() {
        let finalized = StyleScores::from_entries([
            (Dominance, 40),
            (Influence, 60),
            (Stability, 40),
            (Conformity, 10),
        ]);

        let ranked = finalized.ranked();
        assert_eq!(ranked[0].0, Influence);
        // D ties with S at 40 and keeps catalog order (D before S)
        assert_eq!(ranked[1].0, Dominance);
        assert_eq!(ranked[2].0, Stability);
        assert_eq!(ranked[3].0, Conformity);
    }

    #[test]
    fn final_scores_serialize_as_letter_keyed_map() {
        let finalized = StyleScores::from_entries([
            (Dominance, 96),
            (Influence, 64),
            (Stability, 30),
            (Conformity, 10),
        ]);

        let json = serde_json::to_value(&finalized).unwrap();
        assert_eq!(json["D"], 96);
        assert_eq!(json["I"], 64);
        assert_eq!(json["S"], 30);
        assert_eq!(json["C"], 10);
    }

    #[test]
    fn final_scores_deserialize_from_letter_keyed_map() {
        let finalized: StyleScores =
            serde_json::from_str(r#"{"D":96,"I":64,"S":30,"C":10}"#).unwrap();
        assert_eq!(finalized.get(Dominance), 96);
        assert_eq!(finalized.get(Conformity), 10);
    }
}
