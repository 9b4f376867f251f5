//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{Gender, UserProfile};
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, full_name, email, phone, gender, birth_date,
                   avatar_url, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch profile: {}", e),
            )
        })?;

        row.map(row_to_profile).transpose()
    }

    async fn upsert(&self, profile: &UserProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id, full_name, email, phone, gender, birth_date,
                avatar_url, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                gender = EXCLUDED.gender,
                birth_date = EXCLUDED.birth_date,
                avatar_url = EXCLUDED.avatar_url,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.user_id.as_str())
        .bind(profile.full_name.as_deref())
        .bind(profile.email.as_deref())
        .bind(profile.phone.as_deref())
        .bind(profile.gender.map(gender_to_str))
        .bind(profile.birth_date)
        .bind(profile.avatar_url.as_deref())
        .bind(profile.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert profile: {}", e),
            )
        })?;

        Ok(())
    }
}

fn gender_to_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "M",
        Gender::Female => "F",
        Gender::Other => "O",
    }
}

fn gender_from_str(value: &str) -> Option<Gender> {
    match value {
        "M" => Some(Gender::Male),
        "F" => Some(Gender::Female),
        "O" => Some(Gender::Other),
        _ => None,
    }
}

fn row_to_profile(row: PgRow) -> Result<UserProfile, DomainError> {
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| column_error("user_id", e))?;
    let gender: Option<String> = row
        .try_get("gender")
        .map_err(|e| column_error("gender", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    Ok(UserProfile {
        user_id: UserId::new(user_id)?,
        full_name: row
            .try_get("full_name")
            .map_err(|e| column_error("full_name", e))?,
        email: row.try_get("email").map_err(|e| column_error("email", e))?,
        phone: row.try_get("phone").map_err(|e| column_error("phone", e))?,
        gender: gender.as_deref().and_then(gender_from_str),
        birth_date: row
            .try_get("birth_date")
            .map_err(|e| column_error("birth_date", e))?,
        avatar_url: row
            .try_get("avatar_url")
            .map_err(|e| column_error("avatar_url", e))?,
        updated_at: Timestamp::from_datetime(updated_at),
    })
}

fn column_error(column: &str, err: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read column {}: {}", column, err),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_round_trips_through_column_encoding() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(gender_from_str(gender_to_str(gender)), Some(gender));
        }
        assert_eq!(gender_from_str("X"), None);
    }
}
