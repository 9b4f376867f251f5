//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::assessment::{
    CheckRetakeHandler, GetLatestAssessmentHandler, GetReportHandler, ListAssessmentsHandler,
    SubmitAssessmentCommand, SubmitAssessmentHandler,
};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::domain::report::ProfileReport;

use super::dto::{
    AssessmentResponse, ErrorResponse, ReportResponse, RetakeResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
    list_handler: Arc<ListAssessmentsHandler>,
    latest_handler: Arc<GetLatestAssessmentHandler>,
    report_handler: Arc<GetReportHandler>,
    retake_handler: Arc<CheckRetakeHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAssessmentHandler>,
        list_handler: Arc<ListAssessmentsHandler>,
        latest_handler: Arc<GetLatestAssessmentHandler>,
        report_handler: Arc<GetReportHandler>,
        retake_handler: Arc<CheckRetakeHandler>,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
            latest_handler,
            report_handler,
            retake_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Submit a completed sitting
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Response {
    let cmd = SubmitAssessmentCommand {
        user_id: user.id,
        behavioral_rankings: req.behavioral_rankings,
        values_rankings: req.values_rankings,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let report = ProfileReport::from_result(&result.record.result);
            let response = SubmitAssessmentResponse {
                assessment: result.record.into(),
                persisted: result.persisted,
                report: report.into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/assessments - List the user's assessment history
pub async fn list_assessments(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle(&user.id).await {
        Ok(records) => {
            let response: Vec<AssessmentResponse> =
                records.into_iter().map(AssessmentResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/assessments/latest - The newest assessment
pub async fn latest_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.latest_handler.handle(&user.id).await {
        Ok(Some(record)) => {
            let response: AssessmentResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "ASSESSMENT_NOT_FOUND",
                "Nenhuma avaliação realizada.",
            )),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/assessments/:id/report - The assembled report for one assessment
pub async fn assessment_report(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match assessment_id.parse::<AssessmentId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid assessment ID")),
            )
                .into_response()
        }
    };

    match handlers.report_handler.handle(&assessment_id, &user.id).await {
        Ok(view) => {
            let response: ReportResponse = view.report.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/assessments/retake - Retake eligibility
pub async fn retake_eligibility(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.retake_handler.handle(&user.id).await {
        Ok(eligibility) => {
            let response: RetakeResponse = eligibility.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

fn handle_domain_error(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::AssessmentNotFound | ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::IncompleteRanking
        | ErrorCode::SittingFinalized
        | ErrorCode::ConfirmationRequired
        | ErrorCode::RetakeNotAllowed => StatusCode::BAD_REQUEST,
        ErrorCode::DatabaseError | ErrorCode::StorageError | ErrorCode::InternalError => {
            tracing::error!(error = %error, "assessment endpoint failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse::new(error.code.to_string(), error.message)),
    )
        .into_response()
}
