//! Training repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Training};

/// Repository for training session database operations
pub struct TrainingRepository;

impl TrainingRepository {
    /// Create a new training session
    pub async fn create(pool: &PgPool, date: &str, time: &str) -> AppResult<Training> {
        let training = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO trainings (date, time)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(time)
        .fetch_one(pool)
        .await?;

        Ok(training)
    }

    /// Find training by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Training>> {
        let training = sqlx::query_as::<_, Training>(r#"SELECT * FROM trainings WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(training)
    }

    /// List all training sessions
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Training>> {
        let trainings =
            sqlx::query_as::<_, Training>(r#"SELECT * FROM trainings ORDER BY date, time"#)
                .fetch_all(pool)
                .await?;

        Ok(trainings)
    }

    /// Update training (only supplied fields are applied)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        date: Option<&str>,
        time: Option<&str>,
    ) -> AppResult<Training> {
        let training = sqlx::query_as::<_, Training>(
            r#"
            UPDATE trainings
            SET
                date = COALESCE($2, date),
                time = COALESCE($3, time),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(time)
        .fetch_one(pool)
        .await?;

        Ok(training)
    }

    /// Delete training, returning the removed row if it existed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<Option<Training>> {
        let training =
            sqlx::query_as::<_, Training>(r#"DELETE FROM trainings WHERE id = $1 RETURNING *"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(training)
    }
}
