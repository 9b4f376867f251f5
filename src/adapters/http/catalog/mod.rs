//! HTTP adapter for the item catalog endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdjectiveDto, BehavioralGroupDto, ValuePhraseDto, ValuesGroupDto};
pub use routes::catalog_routes;
