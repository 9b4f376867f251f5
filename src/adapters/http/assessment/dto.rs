//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentRecord;
use crate::domain::report::{
    IntensityBand, MotivatorBand, ProfileReport, RetakeEligibility,
};
use crate::domain::scoring::{MotivatorFactor, MotivatorScores, StyleFactor, StyleScores};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A completed sitting: one ranking per group for both inventories.
///
/// Each inner list holds catalog item positions, most identified first.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub behavioral_rankings: Vec<Vec<usize>>,
    pub values_rankings: Vec<Vec<usize>>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored assessment with its finalized score maps.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub created_at: String,
    pub disc: StyleScores,
    pub values: MotivatorScores,
}

impl From<AssessmentRecord> for AssessmentResponse {
    fn from(record: AssessmentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            created_at: record.created_at.as_datetime().to_rfc3339(),
            disc: record.result.disc,
            values: record.result.values,
        }
    }
}

/// Response for a submitted sitting.
///
/// `persisted` is false when the save failed; the report is returned
/// either way.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAssessmentResponse {
    pub assessment: AssessmentResponse,
    pub persisted: bool,
    pub report: ReportResponse,
}

/// One behavioral factor reading.
#[derive(Debug, Clone, Serialize)]
pub struct StyleReadingDto {
    pub factor: StyleFactor,
    pub name: &'static str,
    pub score: u8,
    pub intensity: IntensityBand,
    pub intensity_label: &'static str,
}

/// One motivator reading.
#[derive(Debug, Clone, Serialize)]
pub struct MotivatorReadingDto {
    pub factor: MotivatorFactor,
    pub name: &'static str,
    pub score: u8,
    pub band: MotivatorBand,
    pub band_label: &'static str,
}

/// The dominant motivator with its narrative.
#[derive(Debug, Clone, Serialize)]
pub struct DominantMotivatorDto {
    pub factor: MotivatorFactor,
    pub name: &'static str,
    pub description: &'static str,
}

/// The assembled report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub profile_code: String,
    pub profile_name: String,
    pub description: &'static str,
    pub strengths: Vec<&'static str>,
    pub leadership: Vec<&'static str>,
    pub style_readings: Vec<StyleReadingDto>,
    pub motivators: Vec<MotivatorReadingDto>,
    pub dominant_motivator: DominantMotivatorDto,
}

impl From<ProfileReport> for ReportResponse {
    fn from(report: ProfileReport) -> Self {
        Self {
            profile_code: report.classification.code,
            profile_name: report.profile_name,
            description: report.description,
            strengths: report.strengths,
            leadership: report.leadership,
            style_readings: report
                .style_readings
                .into_iter()
                .map(|r| StyleReadingDto {
                    factor: r.factor,
                    name: r.name,
                    score: r.score,
                    intensity: r.band,
                    intensity_label: r.band.label(),
                })
                .collect(),
            motivators: report
                .motivator_readings
                .into_iter()
                .map(|r| MotivatorReadingDto {
                    factor: r.factor,
                    name: r.name,
                    score: r.score,
                    band: r.band,
                    band_label: r.band.label(),
                })
                .collect(),
            dominant_motivator: DominantMotivatorDto {
                factor: report.dominant_motivator,
                name: report.dominant_motivator_name,
                description: report.dominant_motivator_description,
            },
        }
    }
}

/// Retake eligibility for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct RetakeResponse {
    pub allowed: bool,
    pub days_remaining: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_at: Option<String>,
}

impl From<RetakeEligibility> for RetakeResponse {
    fn from(eligibility: RetakeEligibility) -> Self {
        Self {
            allowed: eligibility.allowed,
            days_remaining: eligibility.days_remaining,
            available_at: eligibility
                .available_at
                .map(|t| t.as_datetime().to_rfc3339()),
        }
    }
}

/// Error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}
