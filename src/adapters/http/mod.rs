//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own HTTP adapter for endpoint exposure:
//! account operations, the item catalogs, assessments/reports, and the
//! user profile.

pub mod assessment;
pub mod auth;
pub mod catalog;
pub mod middleware;
pub mod profile;

pub use assessment::{assessment_routes, AssessmentHandlers};
pub use auth::{auth_routes, AuthHandlers};
pub use catalog::catalog_routes;
pub use profile::{profile_routes, ProfileHandlers};
