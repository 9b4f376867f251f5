//! Display bands for factor scores.
//!
//! Banding is presentation-only; profile-code derivation uses its own
//! threshold and never consults these.

use serde::Serialize;

/// Six-step intensity band for a behavioral factor score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    ExtremelyHigh,
    VeryHigh,
    High,
    Low,
    VeryLow,
    ExtremelyLow,
}

impl IntensityBand {
    /// Bands a finalized score.
    pub fn for_score(score: u8) -> Self {
        match score {
            88.. => IntensityBand::ExtremelyHigh,
            70.. => IntensityBand::VeryHigh,
            51.. => IntensityBand::High,
            33.. => IntensityBand::Low,
            16.. => IntensityBand::VeryLow,
            _ => IntensityBand::ExtremelyLow,
        }
    }

    /// Localized display label (pt-BR).
    pub fn label(&self) -> &'static str {
        match self {
            IntensityBand::ExtremelyHigh => "Extremamente Alto",
            IntensityBand::VeryHigh => "Muito Alto",
            IntensityBand::High => "Alto",
            IntensityBand::Low => "Baixo",
            IntensityBand::VeryLow => "Muito Baixo",
            IntensityBand::ExtremelyLow => "Extremamente Baixo",
        }
    }
}

/// Three-step relevance band for a motivator score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivatorBand {
    Significant,
    Circumstantial,
    Indifferent,
}

impl MotivatorBand {
    /// Bands a finalized motivator score.
    pub fn for_score(score: u8) -> Self {
        match score {
            67.. => MotivatorBand::Significant,
            34.. => MotivatorBand::Circumstantial,
            _ => MotivatorBand::Indifferent,
        }
    }

    /// Localized display label (pt-BR).
    pub fn label(&self) -> &'static str {
        match self {
            MotivatorBand::Significant => "Significativo",
            MotivatorBand::Circumstantial => "Circunstancial",
            MotivatorBand::Indifferent => "Indiferente",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_band_boundaries_are_inclusive() {
        assert_eq!(IntensityBand::for_score(88), IntensityBand::ExtremelyHigh);
        assert_eq!(IntensityBand::for_score(87), IntensityBand::VeryHigh);
        assert_eq!(IntensityBand::for_score(70), IntensityBand::VeryHigh);
        assert_eq!(IntensityBand::for_score(69), IntensityBand::High);
        assert_eq!(IntensityBand::for_score(51), IntensityBand::High);
        assert_eq!(IntensityBand::for_score(50), IntensityBand::Low);
        assert_eq!(IntensityBand::for_score(33), IntensityBand::Low);
        assert_eq!(IntensityBand::for_score(32), IntensityBand::VeryLow);
        assert_eq!(IntensityBand::for_score(16), IntensityBand::VeryLow);
        assert_eq!(IntensityBand::for_score(15), IntensityBand::ExtremelyLow);
        assert_eq!(IntensityBand::for_score(0), IntensityBand::ExtremelyLow);
    }

    #[test]
    fn motivator_band_boundaries_are_inclusive() {
        assert_eq!(MotivatorBand::for_score(100), MotivatorBand::Significant);
        assert_eq!(MotivatorBand::for_score(67), MotivatorBand::Significant);
        assert_eq!(MotivatorBand::for_score(66), MotivatorBand::Circumstantial);
        assert_eq!(MotivatorBand::for_score(34), MotivatorBand::Circumstantial);
        assert_eq!(MotivatorBand::for_score(33), MotivatorBand::Indifferent);
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(IntensityBand::ExtremelyHigh.label(), "Extremamente Alto");
        assert_eq!(MotivatorBand::Indifferent.label(), "Indiferente");
    }
}
