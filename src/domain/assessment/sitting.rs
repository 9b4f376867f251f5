//! One assessment sitting: both inventories, group by group.
//!
//! The sitting runs the behavioral inventory first, then the values
//! inventory, and finalizes into an [`AssessmentResult`]. There are no
//! backward transitions; abandoning a sitting is just dropping it, since
//! nothing is persisted before finalization.

use crate::domain::catalog::{Adjective, ValuePhrase, DNA_ADJECTIVE_GROUPS, VALUES_GROUPS};
use crate::domain::foundation::StateMachine;
use crate::domain::scoring::{
    accumulate, Factor, MotivatorFactor, Ranking, ScoreSet, StyleFactor,
};

use super::errors::AssessmentError;
use super::result::AssessmentResult;
use super::shuffle::ShuffleStrategy;

/// Where a sitting currently stands.
///
/// Group indexes are zero-based; both inventories have ten groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SittingPhase {
    NotStarted,
    BehavioralGroup(usize),
    ValuesGroup(usize),
    Finalized,
}

impl StateMachine for SittingPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SittingPhase::*;
        match (self, target) {
            (NotStarted, BehavioralGroup(0)) => true,
            (BehavioralGroup(i), BehavioralGroup(j)) => *j == i + 1 && *j < GROUP_COUNT,
            (BehavioralGroup(i), ValuesGroup(0)) => *i == GROUP_COUNT - 1,
            (ValuesGroup(i), ValuesGroup(j)) => *j == i + 1 && *j < GROUP_COUNT,
            (ValuesGroup(i), Finalized) => *i == GROUP_COUNT - 1,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SittingPhase::*;
        match self {
            NotStarted => vec![BehavioralGroup(0)],
            BehavioralGroup(i) if *i < GROUP_COUNT - 1 => vec![BehavioralGroup(i + 1)],
            BehavioralGroup(_) => vec![ValuesGroup(0)],
            ValuesGroup(i) if *i < GROUP_COUNT - 1 => vec![ValuesGroup(i + 1)],
            ValuesGroup(_) => vec![Finalized],
            Finalized => vec![],
        }
    }
}

/// Groups per inventory.
pub const GROUP_COUNT: usize = 10;

/// In-memory state of one sitting.
///
/// The score accumulators are explicit values threaded through one
/// `accumulate` call per group; each group is consumed exactly once.
/// Presentation orders are drawn from the injected shuffle strategy once,
/// at sitting start.
#[derive(Debug)]
pub struct Sitting {
    phase: SittingPhase,
    behavioral_presentation: Vec<Vec<usize>>,
    values_presentation: Vec<Vec<usize>>,
    disc: ScoreSet<StyleFactor>,
    values: ScoreSet<MotivatorFactor>,
    result: Option<AssessmentResult>,
}

impl Sitting {
    /// Creates a sitting, drawing all presentation orders up front.
    pub fn new(strategy: &mut dyn ShuffleStrategy) -> Self {
        let behavioral_presentation = (0..GROUP_COUNT)
            .map(|_| strategy.permutation(StyleFactor::ALL.len()))
            .collect();
        let values_presentation = (0..GROUP_COUNT)
            .map(|_| strategy.permutation(MotivatorFactor::ALL.len()))
            .collect();

        Self {
            phase: SittingPhase::NotStarted,
            behavioral_presentation,
            values_presentation,
            disc: ScoreSet::zeroed(),
            values: ScoreSet::zeroed(),
            result: None,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SittingPhase {
        self.phase
    }

    /// Moves from `NotStarted` into the first behavioral group.
    pub fn begin(&mut self) -> Result<(), AssessmentError> {
        if self.phase != SittingPhase::NotStarted {
            return Err(AssessmentError::WrongPhase);
        }
        self.phase = SittingPhase::BehavioralGroup(0);
        Ok(())
    }

    /// Returns the current behavioral group's items in presentation order.
    pub fn presented_adjectives(&self) -> Result<Vec<Adjective>, AssessmentError> {
        match self.phase {
            SittingPhase::BehavioralGroup(i) => Ok(self.behavioral_presentation[i]
                .iter()
                .map(|pos| DNA_ADJECTIVE_GROUPS[i].adjectives[*pos])
                .collect()),
            _ => Err(AssessmentError::WrongPhase),
        }
    }

    /// Returns the current values group's phrases in presentation order.
    pub fn presented_phrases(&self) -> Result<Vec<ValuePhrase>, AssessmentError> {
        match self.phase {
            SittingPhase::ValuesGroup(i) => Ok(self.values_presentation[i]
                .iter()
                .map(|pos| VALUES_GROUPS[i].phrases[*pos])
                .collect()),
            _ => Err(AssessmentError::WrongPhase),
        }
    }

    /// Consumes the current behavioral group's ranking and advances.
    ///
    /// A ranking equal to the presented order is valid input, but only
    /// after explicit confirmation (`confirmed`), mirroring the single
    /// keep-this-order prompt in the interaction layer.
    pub fn advance_behavioral(
        &mut self,
        ranking: Ranking<StyleFactor>,
        confirmed: bool,
    ) -> Result<SittingPhase, AssessmentError> {
        let index = match self.phase {
            SittingPhase::BehavioralGroup(i) => i,
            SittingPhase::Finalized => return Err(AssessmentError::AlreadyFinalized),
            _ => return Err(AssessmentError::WrongPhase),
        };

        let presented: Vec<StyleFactor> = self.behavioral_presentation[index]
            .iter()
            .map(|pos| DNA_ADJECTIVE_GROUPS[index].adjectives[*pos].factor)
            .collect();
        if !confirmed && ranking.as_slice() == presented.as_slice() {
            return Err(AssessmentError::ConfirmationRequired);
        }

        self.disc = accumulate(std::mem::take(&mut self.disc), &ranking);

        let next = if index < GROUP_COUNT - 1 {
            SittingPhase::BehavioralGroup(index + 1)
        } else {
            SittingPhase::ValuesGroup(0)
        };
        debug_assert!(self.phase.can_transition_to(&next));
        self.phase = next;
        Ok(self.phase)
    }

    /// Consumes the current values group's ranking and advances.
    ///
    /// The terminal transition finalizes both accumulators into the
    /// sitting's [`AssessmentResult`].
    pub fn advance_values(
        &mut self,
        ranking: Ranking<MotivatorFactor>,
        confirmed: bool,
    ) -> Result<SittingPhase, AssessmentError> {
        let index = match self.phase {
            SittingPhase::ValuesGroup(i) => i,
            SittingPhase::Finalized => return Err(AssessmentError::AlreadyFinalized),
            _ => return Err(AssessmentError::WrongPhase),
        };

        let presented: Vec<MotivatorFactor> = self.values_presentation[index]
            .iter()
            .map(|pos| VALUES_GROUPS[index].phrases[*pos].factor)
            .collect();
        if !confirmed && ranking.as_slice() == presented.as_slice() {
            return Err(AssessmentError::ConfirmationRequired);
        }

        self.values = accumulate(std::mem::take(&mut self.values), &ranking);

        let next = if index < GROUP_COUNT - 1 {
            SittingPhase::ValuesGroup(index + 1)
        } else {
            self.result = Some(AssessmentResult::new(
                self.disc.finalize(),
                self.values.finalize(),
            ));
            SittingPhase::Finalized
        };
        debug_assert!(self.phase.can_transition_to(&next));
        self.phase = next;
        Ok(self.phase)
    }

    /// Returns the finalized result, present only once `Finalized`.
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::IdentityShuffle;
    use crate::domain::scoring::Factor;

    fn started_sitting() -> Sitting {
        let mut sitting = Sitting::new(&mut IdentityShuffle);
        sitting.begin().unwrap();
        sitting
    }

    fn catalog_style_ranking() -> Ranking<StyleFactor> {
        Ranking::try_new(vec![
            StyleFactor::Dominance,
            StyleFactor::Influence,
            StyleFactor::Stability,
            StyleFactor::Conformity,
        ])
        .unwrap()
    }

    fn catalog_motivator_ranking() -> Ranking<MotivatorFactor> {
        Ranking::try_new(MotivatorFactor::ALL.to_vec()).unwrap()
    }

    #[test]
    fn begin_moves_into_first_behavioral_group() {
        let sitting = started_sitting();
        assert_eq!(sitting.phase(), SittingPhase::BehavioralGroup(0));
    }

    #[test]
    fn begin_twice_is_rejected() {
        let mut sitting = started_sitting();
        assert_eq!(sitting.begin(), Err(AssessmentError::WrongPhase));
    }

    #[test]
    fn complete_sitting_produces_expected_scores() {
        let mut sitting = started_sitting();

        for _ in 0..GROUP_COUNT {
            sitting
                .advance_behavioral(catalog_style_ranking(), true)
                .unwrap();
        }
        assert_eq!(sitting.phase(), SittingPhase::ValuesGroup(0));

        for _ in 0..GROUP_COUNT {
            sitting
                .advance_values(catalog_motivator_ranking(), true)
                .unwrap();
        }
        assert_eq!(sitting.phase(), SittingPhase::Finalized);

        let result = sitting.result().unwrap();
        assert_eq!(result.disc.get(StyleFactor::Dominance), 96);
        assert_eq!(result.disc.get(StyleFactor::Influence), 64);
        assert_eq!(result.disc.get(StyleFactor::Stability), 30);
        assert_eq!(result.disc.get(StyleFactor::Conformity), 10);
        assert_eq!(result.values.get(MotivatorFactor::Political), 100);
        assert_eq!(result.values.get(MotivatorFactor::Theoretical), 10);
    }

    #[test]
    fn untouched_order_requires_confirmation() {
        let mut sitting = started_sitting();

        // Identity shuffle presents the catalog order, so submitting the
        // catalog order unchanged is the untouched case.
        let result = sitting.advance_behavioral(catalog_style_ranking(), false);
        assert_eq!(result, Err(AssessmentError::ConfirmationRequired));

        // The group was not consumed.
        assert_eq!(sitting.phase(), SittingPhase::BehavioralGroup(0));
    }

    #[test]
    fn untouched_order_scores_after_confirmation() {
        let mut sitting = started_sitting();
        let phase = sitting
            .advance_behavioral(catalog_style_ranking(), true)
            .unwrap();
        assert_eq!(phase, SittingPhase::BehavioralGroup(1));
    }

    #[test]
    fn reordered_ranking_needs_no_confirmation() {
        let mut sitting = started_sitting();
        let reordered = Ranking::try_new(vec![
            StyleFactor::Conformity,
            StyleFactor::Influence,
            StyleFactor::Stability,
            StyleFactor::Dominance,
        ])
        .unwrap();

        assert!(sitting.advance_behavioral(reordered, false).is_ok());
    }

    #[test]
    fn values_advance_is_rejected_during_behavioral_phase() {
        let mut sitting = started_sitting();
        let result = sitting.advance_values(catalog_motivator_ranking(), true);
        assert_eq!(result, Err(AssessmentError::WrongPhase));
    }

    #[test]
    fn finalized_sitting_rejects_further_input() {
        let mut sitting = started_sitting();
        for _ in 0..GROUP_COUNT {
            sitting
                .advance_behavioral(catalog_style_ranking(), true)
                .unwrap();
        }
        for _ in 0..GROUP_COUNT {
            sitting
                .advance_values(catalog_motivator_ranking(), true)
                .unwrap();
        }

        let result = sitting.advance_values(catalog_motivator_ranking(), true);
        assert_eq!(result, Err(AssessmentError::AlreadyFinalized));
    }

    #[test]
    fn result_is_absent_before_finalization() {
        let sitting = started_sitting();
        assert!(sitting.result().is_none());
    }

    #[test]
    fn presented_items_follow_the_shuffle_strategy() {
        let mut seeded = crate::domain::assessment::SeededShuffle::new(99);
        let mut sitting = Sitting::new(&mut seeded);
        sitting.begin().unwrap();

        let presented = sitting.presented_adjectives().unwrap();
        assert_eq!(presented.len(), 4);

        // Same seed reproduces the same presentation.
        let mut seeded_again = crate::domain::assessment::SeededShuffle::new(99);
        let mut sitting_again = Sitting::new(&mut seeded_again);
        sitting_again.begin().unwrap();
        assert_eq!(presented, sitting_again.presented_adjectives().unwrap());
    }

    #[test]
    fn phase_state_machine_has_no_backward_transitions() {
        use SittingPhase::*;

        assert!(NotStarted.can_transition_to(&BehavioralGroup(0)));
        assert!(BehavioralGroup(3).can_transition_to(&BehavioralGroup(4)));
        assert!(BehavioralGroup(9).can_transition_to(&ValuesGroup(0)));
        assert!(ValuesGroup(9).can_transition_to(&Finalized));

        assert!(!BehavioralGroup(4).can_transition_to(&BehavioralGroup(3)));
        assert!(!ValuesGroup(0).can_transition_to(&BehavioralGroup(9)));
        assert!(Finalized.is_terminal());
    }
}
