//! Factor enums for the two inventories.
//!
//! The two factor spaces are disjoint domains that happen to share the
//! letter "S": behavioral S means Estabilidade, values S means Social.
//! They are never compared to each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A scored dimension within one inventory.
///
/// `ALL` lists the factors in catalog priority order; that order breaks
/// ties wherever factors are sorted by score. `POINTS` is the inventory's
/// rank-position point table (position 0 = most identified) and has one
/// entry per factor.
pub trait Factor: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// All factors, in catalog priority order.
    const ALL: &'static [Self];

    /// Point value per rank position, front-loaded by design.
    const POINTS: &'static [f64];

    /// Single-letter factor code.
    fn letter(&self) -> char;

    /// Parses a factor from its letter code.
    fn from_letter(c: char) -> Option<Self>;

    /// Localized display name (pt-BR, the product's language).
    fn display_name(&self) -> &'static str;
}

/// Behavioral style factor (DISC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StyleFactor {
    #[serde(rename = "D")]
    Dominance,
    #[serde(rename = "I")]
    Influence,
    #[serde(rename = "S")]
    Stability,
    #[serde(rename = "C")]
    Conformity,
}

impl Factor for StyleFactor {
    const ALL: &'static [Self] = &[
        StyleFactor::Dominance,
        StyleFactor::Influence,
        StyleFactor::Stability,
        StyleFactor::Conformity,
    ];

    const POINTS: &'static [f64] = &[9.6, 6.4, 3.0, 1.0];

    fn letter(&self) -> char {
        match self {
            StyleFactor::Dominance => 'D',
            StyleFactor::Influence => 'I',
            StyleFactor::Stability => 'S',
            StyleFactor::Conformity => 'C',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'D' => Some(StyleFactor::Dominance),
            'I' => Some(StyleFactor::Influence),
            'S' => Some(StyleFactor::Stability),
            'C' => Some(StyleFactor::Conformity),
            _ => None,
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            StyleFactor::Dominance => "Dominância",
            StyleFactor::Influence => "Influência",
            StyleFactor::Stability => "Estabilidade",
            StyleFactor::Conformity => "Conformidade",
        }
    }
}

impl fmt::Display for StyleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Values motivator factor (Spranger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MotivatorFactor {
    #[serde(rename = "P")]
    Political,
    #[serde(rename = "E")]
    Economic,
    #[serde(rename = "R")]
    Religious,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "B")]
    Aesthetic,
    #[serde(rename = "T")]
    Theoretical,
}

impl Factor for MotivatorFactor {
    const ALL: &'static [Self] = &[
        MotivatorFactor::Political,
        MotivatorFactor::Economic,
        MotivatorFactor::Religious,
        MotivatorFactor::Social,
        MotivatorFactor::Aesthetic,
        MotivatorFactor::Theoretical,
    ];

    const POINTS: &'static [f64] = &[10.0, 8.0, 6.0, 3.8, 2.2, 1.0];

    fn letter(&self) -> char {
        match self {
            MotivatorFactor::Political => 'P',
            MotivatorFactor::Economic => 'E',
            MotivatorFactor::Religious => 'R',
            MotivatorFactor::Social => 'S',
            MotivatorFactor::Aesthetic => 'B',
            MotivatorFactor::Theoretical => 'T',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'P' => Some(MotivatorFactor::Political),
            'E' => Some(MotivatorFactor::Economic),
            'R' => Some(MotivatorFactor::Religious),
            'S' => Some(MotivatorFactor::Social),
            'B' => Some(MotivatorFactor::Aesthetic),
            'T' => Some(MotivatorFactor::Theoretical),
            _ => None,
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            MotivatorFactor::Political => "Político",
            MotivatorFactor::Economic => "Econômico",
            MotivatorFactor::Religious => "Religioso",
            MotivatorFactor::Social => "Social",
            MotivatorFactor::Aesthetic => "Estético",
            MotivatorFactor::Theoretical => "Teórico",
        }
    }
}

impl fmt::Display for MotivatorFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_factor_has_one_point_per_rank_position() {
        assert_eq!(StyleFactor::ALL.len(), 4);
        assert_eq!(StyleFactor::POINTS.len(), 4);
    }

    #[test]
    fn motivator_factor_has_one_point_per_rank_position() {
        assert_eq!(MotivatorFactor::ALL.len(), 6);
        assert_eq!(MotivatorFactor::POINTS.len(), 6);
    }

    #[test]
    fn style_letters_round_trip() {
        for factor in StyleFactor::ALL {
            assert_eq!(StyleFactor::from_letter(factor.letter()), Some(*factor));
        }
        assert_eq!(StyleFactor::from_letter('X'), None);
    }

    #[test]
    fn motivator_letters_round_trip() {
        for factor in MotivatorFactor::ALL {
            assert_eq!(MotivatorFactor::from_letter(factor.letter()), Some(*factor));
        }
        assert_eq!(MotivatorFactor::from_letter('Z'), None);
    }

    #[test]
    fn style_factor_serializes_as_letter() {
        let json = serde_json::to_string(&StyleFactor::Dominance).unwrap();
        assert_eq!(json, "\"D\"");
    }

    #[test]
    fn motivator_factor_serializes_as_letter() {
        let json = serde_json::to_string(&MotivatorFactor::Aesthetic).unwrap();
        assert_eq!(json, "\"B\"");
    }

    #[test]
    fn point_tables_are_front_loaded() {
        for points in [StyleFactor::POINTS, MotivatorFactor::POINTS] {
            for pair in points.windows(2) {
                assert!(pair[0] > pair[1]);
            }
        }
    }

    #[test]
    fn display_names_are_localized() {
        assert_eq!(StyleFactor::Stability.display_name(), "Estabilidade");
        assert_eq!(MotivatorFactor::Social.display_name(), "Social");
    }
}
