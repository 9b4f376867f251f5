//! Assessment use cases.

mod check_retake;
mod get_latest_assessment;
mod get_report;
mod list_assessments;
mod submit_assessment;

pub use check_retake::CheckRetakeHandler;
pub use get_latest_assessment::GetLatestAssessmentHandler;
pub use get_report::{GetReportHandler, ReportView};
pub use list_assessments::ListAssessmentsHandler;
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
