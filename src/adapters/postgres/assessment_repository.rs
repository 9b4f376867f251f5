//! PostgreSQL implementation of AssessmentRepository.
//!
//! Score maps are persisted as jsonb keyed by factor letter, matching the
//! durable schema: `assessments(id, user_id, disc_results, values_results,
//! created_at)`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::assessment::{AssessmentRecord, AssessmentResult};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::AssessmentRepository;

/// PostgreSQL implementation of AssessmentRepository.
#[derive(Clone)]
pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    /// Creates a new PostgresAssessmentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        let disc = serde_json::to_value(&record.result.disc)
            .map_err(|e| serialization_error("disc_results", e))?;
        let values = serde_json::to_value(&record.result.values)
            .map_err(|e| serialization_error("values_results", e))?;

        sqlx::query(
            r#"
            INSERT INTO assessments (
                id, user_id, disc_results, values_results, created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_str())
        .bind(disc)
        .bind(values)
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert assessment: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, disc_results, values_results, created_at
            FROM assessments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch assessment: {}", e),
            )
        })?;

        row.map(row_to_record).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, disc_results, values_results, created_at
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list assessments: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn find_latest(&self, user_id: &UserId) -> Result<Option<AssessmentRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, disc_results, values_results, created_at
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch latest assessment: {}", e),
            )
        })?;

        row.map(row_to_record).transpose()
    }
}

fn serialization_error(field: &str, err: serde_json::Error) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("Failed to serialize {}: {}", field, err),
    )
}

fn row_to_record(row: PgRow) -> Result<AssessmentRecord, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| column_error("id", e))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| column_error("user_id", e))?;
    let disc: serde_json::Value = row
        .try_get("disc_results")
        .map_err(|e| column_error("disc_results", e))?;
    let values: serde_json::Value = row
        .try_get("values_results")
        .map_err(|e| column_error("values_results", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    let disc = serde_json::from_value(disc).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Corrupt disc_results column: {}", e),
        )
    })?;
    let values = serde_json::from_value(values).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Corrupt values_results column: {}", e),
        )
    })?;

    Ok(AssessmentRecord {
        id: AssessmentId::from_uuid(id),
        user_id: UserId::new(user_id)?,
        result: AssessmentResult::new(disc, values),
        created_at: Timestamp::from_datetime(created_at),
    })
}

fn column_error(column: &str, err: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read column {}: {}", column, err),
    )
}
