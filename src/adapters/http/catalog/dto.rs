//! HTTP DTOs for the catalog endpoints.

use serde::Serialize;

use crate::domain::catalog::{Adjective, ValuePhrase};
use crate::domain::scoring::{MotivatorFactor, StyleFactor};

/// One behavioral adjective as presented to the client.
#[derive(Debug, Clone, Serialize)]
pub struct AdjectiveDto {
    /// Catalog position inside the group; rankings reference this.
    pub position: usize,
    pub text: &'static str,
    pub factor: StyleFactor,
    pub description: &'static str,
}

/// One behavioral group in presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct BehavioralGroupDto {
    pub adjectives: Vec<AdjectiveDto>,
}

/// One value phrase as presented to the client.
#[derive(Debug, Clone, Serialize)]
pub struct ValuePhraseDto {
    /// Catalog position inside the group; rankings reference this.
    pub position: usize,
    pub text: &'static str,
    pub factor: MotivatorFactor,
}

/// One values group in presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct ValuesGroupDto {
    pub phrases: Vec<ValuePhraseDto>,
}

impl AdjectiveDto {
    pub fn from_item(position: usize, adjective: &Adjective) -> Self {
        Self {
            position,
            text: adjective.text,
            factor: adjective.factor,
            description: adjective.description,
        }
    }
}

impl ValuePhraseDto {
    pub fn from_item(position: usize, phrase: &ValuePhrase) -> Self {
        Self {
            position,
            text: phrase.text,
            factor: phrase.factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::DNA_ADJECTIVE_GROUPS;

    #[test]
    fn adjective_dto_keeps_catalog_position_and_letter_factor() {
        let dto = AdjectiveDto::from_item(2, &DNA_ADJECTIVE_GROUPS[0].adjectives[2]);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["position"], 2);
        assert_eq!(json["factor"], "S");
        assert_eq!(json["text"], "Consistente");
    }
}
