//! Tagged catalog items and their presentation groups.

use serde::Serialize;

use crate::domain::scoring::{MotivatorFactor, StyleFactor};

/// A behavioral adjective tagged with its style factor.
///
/// The description backs the "?" tooltip shown while ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjective {
    pub text: &'static str,
    pub factor: StyleFactor,
    pub description: &'static str,
}

/// One behavioral ranking decision: four adjectives, one per factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjectiveGroup {
    pub adjectives: [Adjective; 4],
}

impl AdjectiveGroup {
    /// Returns the group's factors in catalog presentation order.
    pub fn factors(&self) -> [StyleFactor; 4] {
        [
            self.adjectives[0].factor,
            self.adjectives[1].factor,
            self.adjectives[2].factor,
            self.adjectives[3].factor,
        ]
    }
}

/// A value phrase tagged with its motivator factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValuePhrase {
    pub text: &'static str,
    pub factor: MotivatorFactor,
}

/// One values ranking decision: six phrases, one per factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueGroup {
    pub phrases: [ValuePhrase; 6],
}

impl ValueGroup {
    /// Returns the group's factors in catalog presentation order.
    pub fn factors(&self) -> [MotivatorFactor; 6] {
        [
            self.phrases[0].factor,
            self.phrases[1].factor,
            self.phrases[2].factor,
            self.phrases[3].factor,
            self.phrases[4].factor,
            self.phrases[5].factor,
        ]
    }
}
