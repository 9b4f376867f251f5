//! The point-table accumulation step.

use super::factor::Factor;
use super::ranking::Ranking;
use super::score_set::ScoreSet;

/// Consumes one ranked group, distributing the inventory's point table
/// over the accumulator by rank position.
///
/// Position 0 (most identified) earns the largest value. The tables are
/// deliberately front-loaded rather than linear, so consistent top-ranking
/// of one factor across the ten groups separates it from the rest.
/// Accumulation is purely additive; nothing is normalized per group.
pub fn accumulate<F: Factor>(mut scores: ScoreSet<F>, ranking: &Ranking<F>) -> ScoreSet<F> {
    for (position, factor) in ranking.iter().enumerate() {
        scores.add(*factor, F::POINTS[position]);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{MotivatorFactor, StyleFactor};
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn style_ranking(order: Vec<StyleFactor>) -> Ranking<StyleFactor> {
        Ranking::try_new(order).unwrap()
    }

    fn shuffled<F: Factor>(seed: u64) -> Ranking<F> {
        let mut order = F::ALL.to_vec();
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);
        Ranking::try_new(order).unwrap()
    }

    #[test]
    fn distributes_points_by_rank_position() {
        use StyleFactor::*;

        let ranking = style_ranking(vec![Stability, Conformity, Dominance, Influence]);
        let scores = accumulate(ScoreSet::zeroed(), &ranking);

        assert!((scores.get(Stability) - 9.6).abs() < 1e-9);
        assert!((scores.get(Conformity) - 6.4).abs() < 1e-9);
        assert!((scores.get(Dominance) - 3.0).abs() < 1e-9);
        assert!((scores.get(Influence) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identical_order_over_ten_groups_matches_expected_totals() {
        use StyleFactor::*;

        let ranking = style_ranking(vec![Dominance, Influence, Stability, Conformity]);
        let mut scores = ScoreSet::zeroed();
        for _ in 0..10 {
            scores = accumulate(scores, &ranking);
        }

        let finalized = scores.finalize();
        assert_eq!(finalized.get(Dominance), 96);
        assert_eq!(finalized.get(Influence), 64);
        assert_eq!(finalized.get(Stability), 30);
        assert_eq!(finalized.get(Conformity), 10);
    }

    proptest! {
        #[test]
        fn style_group_always_distributes_twenty_points(seed in any::<u64>()) {
            let ranking = shuffled::<StyleFactor>(seed);
            let scores = accumulate(ScoreSet::zeroed(), &ranking);
            prop_assert!((scores.sum() - 20.0).abs() < 1e-9);
        }

        #[test]
        fn values_group_always_distributes_thirty_one_points(seed in any::<u64>()) {
            let ranking = shuffled::<MotivatorFactor>(seed);
            let scores = accumulate(ScoreSet::zeroed(), &ranking);
            prop_assert!((scores.sum() - 31.0).abs() < 1e-9);
        }

        #[test]
        fn every_factor_earns_exactly_one_position_per_group(seed in any::<u64>()) {
            let ranking = shuffled::<StyleFactor>(seed);
            let scores = accumulate(ScoreSet::zeroed(), &ranking);
            for factor in StyleFactor::ALL {
                let total = scores.get(*factor);
                prop_assert!(StyleFactor::POINTS.iter().any(|p| (total - p).abs() < 1e-9));
            }
        }
    }
}
