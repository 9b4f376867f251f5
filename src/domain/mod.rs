//! Domain layer - the assessment vocabulary and its pure rules.
//!
//! Organized as bounded modules around the scoring-and-reporting core:
//!
//! - `foundation` - shared value objects (ids, timestamps, errors, auth)
//! - `catalog` - the immutable item catalogs for both inventories
//! - `scoring` - factors, score sets, rankings, and the point-table fold
//! - `assessment` - the sitting state machine and its durable result
//! - `report` - profile classification, narratives, and retake policy
//! - `user` - the editable user profile

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod report;
pub mod scoring;
pub mod user;
