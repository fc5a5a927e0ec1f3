//! Training service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::TrainingRepository,
    error::{AppError, AppResult},
    models::Training,
    utils::time::today_utc,
    utils::validation::validate_training,
};

/// Training service for business logic
pub struct TrainingService;

impl TrainingService {
    /// Create a new training session (must not be scheduled in the past)
    pub async fn create_training(
        pool: &PgPool,
        date: Option<&str>,
        time: Option<&str>,
    ) -> AppResult<Training> {
        let errors = validate_training(date, time, true, today_utc());
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        let (Some(date), Some(time)) = (date, time) else {
            return Err(AppError::Internal(anyhow::anyhow!(
                "training fields missing after validation"
            )));
        };

        TrainingRepository::create(pool, date, time).await
    }

    /// Get training by ID
    pub async fn get_training_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Training> {
        TrainingRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Training not found".to_string()))
    }

    /// List all training sessions
    pub async fn list_trainings(pool: &PgPool) -> AppResult<Vec<Training>> {
        TrainingRepository::list(pool).await
    }

    /// Update a training session, validating only the supplied fields
    pub async fn update_training(
        pool: &PgPool,
        id: &Uuid,
        date: Option<&str>,
        time: Option<&str>,
    ) -> AppResult<Training> {
        let errors = validate_training(date, time, false, today_utc());
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        Self::get_training_by_id(pool, id).await?;

        TrainingRepository::update(pool, id, date, time).await
    }

    /// Delete a training session
    pub async fn delete_training(pool: &PgPool, id: &Uuid) -> AppResult<Training> {
        TrainingRepository::delete(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Training not found".to_string()))
    }
}
