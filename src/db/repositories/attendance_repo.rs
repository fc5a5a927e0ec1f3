//! Attendance repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Attendance};

/// Repository for attendance database operations
pub struct AttendanceRepository;

impl AttendanceRepository {
    /// Create a new attendance record
    pub async fn create(
        pool: &PgPool,
        person_id: &Uuid,
        training_id: &Uuid,
        attended: bool,
    ) -> AppResult<Attendance> {
        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendances (person_id, training_id, attended)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(person_id)
        .bind(training_id)
        .bind(attended)
        .fetch_one(pool)
        .await?;

        Ok(attendance)
    }

    /// Find attendance by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Attendance>> {
        let attendance =
            sqlx::query_as::<_, Attendance>(r#"SELECT * FROM attendances WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(attendance)
    }

    /// List a person's attendance records
    pub async fn find_by_person(pool: &PgPool, person_id: &Uuid) -> AppResult<Vec<Attendance>> {
        let attendances = sqlx::query_as::<_, Attendance>(
            r#"SELECT * FROM attendances WHERE person_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(person_id)
        .fetch_all(pool)
        .await?;

        Ok(attendances)
    }

    /// Update the attended flag
    pub async fn update(pool: &PgPool, id: &Uuid, attended: bool) -> AppResult<Attendance> {
        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            UPDATE attendances
            SET attended = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(attended)
        .fetch_one(pool)
        .await?;

        Ok(attendance)
    }
}
