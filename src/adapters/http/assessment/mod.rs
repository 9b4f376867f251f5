//! HTTP adapter for assessment and report endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssessmentResponse, ErrorResponse, ReportResponse, RetakeResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
