//! Tournament service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::TournamentRepository,
    error::{AppError, AppResult},
    models::Tournament,
    utils::validation::{TournamentCandidate, validate_tournament},
};

/// Tournament service for business logic
pub struct TournamentService;

impl TournamentService {
    /// Create a new tournament
    ///
    /// All three fields must be supplied; the validator adds a combined
    /// "all required" error when any is missing, on top of the per-field
    /// checks.
    pub async fn create_tournament(
        pool: &PgPool,
        name: Option<&str>,
        date: Option<&str>,
        total_matches: Option<i32>,
    ) -> AppResult<Tournament> {
        let candidate = TournamentCandidate {
            name,
            date,
            total_matches,
        };
        let errors = validate_tournament(&candidate, true);
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        // Validation guarantees all three are present
        let (Some(name), Some(date), Some(total_matches)) = (name, date, total_matches) else {
            return Err(AppError::Internal(anyhow::anyhow!(
                "tournament fields missing after validation"
            )));
        };

        TournamentRepository::create(pool, name, date, total_matches).await
    }

    /// Get tournament by ID
    pub async fn get_tournament_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Tournament> {
        TournamentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tournament not found".to_string()))
    }

    /// List all tournaments
    pub async fn list_tournaments(pool: &PgPool) -> AppResult<Vec<Tournament>> {
        TournamentRepository::list(pool).await
    }

    /// Update a tournament, validating only the supplied fields
    pub async fn update_tournament(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        date: Option<&str>,
        total_matches: Option<i32>,
    ) -> AppResult<Tournament> {
        let candidate = TournamentCandidate {
            name,
            date,
            total_matches,
        };
        let errors = validate_tournament(&candidate, false);
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        Self::get_tournament_by_id(pool, id).await?;

        TournamentRepository::update(pool, id, name, date, total_matches).await
    }

    /// Delete a tournament
    pub async fn delete_tournament(pool: &PgPool, id: &Uuid) -> AppResult<Tournament> {
        TournamentRepository::delete(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tournament not found".to_string()))
    }
}
