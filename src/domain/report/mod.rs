//! Report module - classification, narratives, and retake policy.
//!
//! Everything here is derived on demand from an [`AssessmentResult`];
//! nothing is persisted. The narrative tables carry the product's pt-BR
//! content.
//!
//! [`AssessmentResult`]: crate::domain::assessment::AssessmentResult

mod classifier;
mod intensity;
mod motivator;
mod narrative;
mod profile_report;
mod retake;

pub use classifier::{classify, ProfileClassification, HIGH_FACTOR_THRESHOLD};
pub use intensity::{IntensityBand, MotivatorBand};
pub use motivator::select_motivator;
pub use narrative::{
    combination_description, factor_insights, motivator_description, pure_profile_description,
    FactorInsights,
};
pub use profile_report::{MotivatorReading, ProfileReport, StyleReading};
pub use retake::{RetakeEligibility, RetakePolicy};
