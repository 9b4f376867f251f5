//! HTTP handlers for the catalog endpoints.
//!
//! Groups are returned in a shuffled presentation order. Clients may pass
//! a `seed` query parameter to make the shuffle reproducible; rankings
//! always reference the catalog `position` carried on each item, so the
//! presentation order never changes scoring.

use axum::{extract::Query, response::IntoResponse, Json};
use serde::Deserialize;

use crate::domain::assessment::{SeededShuffle, ShuffleStrategy};
use crate::domain::catalog::{DNA_ADJECTIVE_GROUPS, VALUES_GROUPS};

use super::dto::{AdjectiveDto, BehavioralGroupDto, ValuePhraseDto, ValuesGroupDto};

/// Query parameters for catalog presentation.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub seed: Option<u64>,
}

fn strategy_for(query: &CatalogQuery) -> SeededShuffle {
    match query.seed {
        Some(seed) => SeededShuffle::new(seed),
        None => SeededShuffle::from_entropy(),
    }
}

/// GET /api/catalog/behavioral - The ten adjective groups, shuffled
pub async fn behavioral_catalog(Query(query): Query<CatalogQuery>) -> impl IntoResponse {
    let mut strategy = strategy_for(&query);

    let groups: Vec<BehavioralGroupDto> = DNA_ADJECTIVE_GROUPS
        .iter()
        .map(|group| BehavioralGroupDto {
            adjectives: strategy
                .permutation(group.adjectives.len())
                .into_iter()
                .map(|position| AdjectiveDto::from_item(position, &group.adjectives[position]))
                .collect(),
        })
        .collect();

    Json(groups)
}

/// GET /api/catalog/values - The ten value-phrase groups, shuffled
pub async fn values_catalog(Query(query): Query<CatalogQuery>) -> impl IntoResponse {
    let mut strategy = strategy_for(&query);

    let groups: Vec<ValuesGroupDto> = VALUES_GROUPS
        .iter()
        .map(|group| ValuesGroupDto {
            phrases: strategy
                .permutation(group.phrases.len())
                .into_iter()
                .map(|position| ValuePhraseDto::from_item(position, &group.phrases[position]))
                .collect(),
        })
        .collect();

    Json(groups)
}
