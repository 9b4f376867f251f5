//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    assessment_report, latest_assessment, list_assessments, retake_eligibility, submit_assessment,
    AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(submit_assessment))
        .route("/", get(list_assessments))
        .route("/latest", get(latest_assessment))
        .route("/retake", get(retake_eligibility))
        .route("/:id/report", get(assessment_report))
        .with_state(handlers)
}
