//! The assembled report read model.
//!
//! Derived on demand from an [`AssessmentResult`]; recomputed every time a
//! report is viewed. Rendering (charts, image export) happens elsewhere.
//!
//! [`AssessmentResult`]: crate::domain::assessment::AssessmentResult

use crate::domain::assessment::AssessmentResult;
use crate::domain::scoring::{Factor, MotivatorFactor, StyleFactor};

use super::classifier::{classify, ProfileClassification};
use super::intensity::{IntensityBand, MotivatorBand};
use super::motivator::select_motivator;
use super::narrative::{
    combination_description, factor_insights, motivator_description, pure_profile_description,
};

/// One behavioral factor's score with its display band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleReading {
    pub factor: StyleFactor,
    pub name: &'static str,
    pub score: u8,
    pub band: IntensityBand,
}

/// One motivator's score with its display band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotivatorReading {
    pub factor: MotivatorFactor,
    pub name: &'static str,
    pub score: u8,
    pub band: MotivatorBand,
}

/// Everything the report view needs, in one derived value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReport {
    pub classification: ProfileClassification,

    /// Profile names of the qualifying factors joined with " - ",
    /// e.g. "Dominante - Influente".
    pub profile_name: String,

    /// Strengths of every qualifying factor, concatenated in code order.
    pub strengths: Vec<&'static str>,

    /// Leadership traits of every qualifying factor, in code order.
    pub leadership: Vec<&'static str>,

    /// Pure-profile text for a single high factor, the ordered top-two
    /// combination text otherwise.
    pub description: &'static str,

    /// Behavioral readings in catalog order (D, I, S, C).
    pub style_readings: Vec<StyleReading>,

    /// Motivator readings sorted descending by score.
    pub motivator_readings: Vec<MotivatorReading>,

    pub dominant_motivator: MotivatorFactor,
    pub dominant_motivator_name: &'static str,
    pub dominant_motivator_description: &'static str,
}

impl ProfileReport {
    /// Assembles the full report from one finalized result.
    pub fn from_result(result: &AssessmentResult) -> Self {
        let classification = classify(&result.disc);

        let mut profile_names = Vec::new();
        let mut strengths = Vec::new();
        let mut leadership = Vec::new();
        for factor in &classification.factors {
            let insights = factor_insights(*factor);
            profile_names.push(insights.profile_name);
            strengths.extend(insights.strengths);
            leadership.extend(insights.leadership);
        }

        let description = match classification.top_pair() {
            Some((first, second)) => combination_description(first, second),
            None => pure_profile_description(classification.primary()),
        };

        let style_readings = result
            .disc
            .iter()
            .map(|(factor, score)| StyleReading {
                factor,
                name: factor.display_name(),
                score,
                band: IntensityBand::for_score(score),
            })
            .collect();

        let mut motivator_readings: Vec<MotivatorReading> = result
            .values
            .iter()
            .map(|(factor, score)| MotivatorReading {
                factor,
                name: factor.display_name(),
                score,
                band: MotivatorBand::for_score(score),
            })
            .collect();
        motivator_readings.sort_by(|a, b| b.score.cmp(&a.score));

        let dominant_motivator = select_motivator(&result.values);

        Self {
            profile_name: profile_names.join(" - "),
            strengths,
            leadership,
            description,
            style_readings,
            motivator_readings,
            dominant_motivator,
            dominant_motivator_name: dominant_motivator.display_name(),
            dominant_motivator_description: motivator_description(dominant_motivator),
            classification,
        }
    }
}
