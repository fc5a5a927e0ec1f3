//! Participation service
//!
//! Orchestrates participation validation (field rules plus cross-reference
//! checks against tournaments and persons) and keeps the derived
//! participation ratio consistent with the referenced tournament's match
//! total.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ParticipationRepository, PersonRepository, TournamentRepository},
    error::{AppError, AppResult},
    models::Participation,
    utils::metrics::participation_ratio,
    utils::validation::{
        ParticipationCandidate, validate_participation_fields, validate_participation_references,
    },
};

/// Participation service for business logic
pub struct ParticipationService;

impl ParticipationService {
    /// Validate a participation candidate, accumulating every applicable
    /// error: missing fields, range violations, unresolvable references,
    /// a tournament without a usable match total, and a matches-played
    /// value above that total.
    ///
    /// A missing tournament short-circuits the total-matches checks (there
    /// is nothing to compare against), but all other checks still run.
    pub async fn validate(pool: &PgPool, candidate: &ParticipationCandidate) -> AppResult<Vec<String>> {
        let mut errors = validate_participation_fields(candidate);

        let tournament = match candidate.tournament_id {
            Some(id) => TournamentRepository::find_by_id(pool, &id).await?,
            None => None,
        };
        let person = match candidate.person_id {
            Some(id) => PersonRepository::find_by_id(pool, &id).await?,
            None => None,
        };

        errors.extend(validate_participation_references(
            candidate,
            tournament.as_ref(),
            person.as_ref(),
        ));

        Ok(errors)
    }

    /// Create a participation, computing the ratio from the referenced
    /// tournament's match total
    pub async fn create_participation(
        pool: &PgPool,
        tournament_id: Option<Uuid>,
        person_id: Option<Uuid>,
        position: Option<i32>,
        matches_played: Option<i32>,
    ) -> AppResult<Participation> {
        let candidate = ParticipationCandidate {
            tournament_id,
            person_id,
            position,
            matches_played,
        };
        let errors = Self::validate(pool, &candidate).await?;
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        // Validation guarantees all four fields and both references
        let (Some(tournament_id), Some(person_id), Some(position), Some(matches_played)) =
            (tournament_id, person_id, position, matches_played)
        else {
            return Err(AppError::Internal(anyhow::anyhow!(
                "participation fields missing after validation"
            )));
        };

        let ratio = Self::compute_ratio(pool, &tournament_id, matches_played).await?;

        ParticipationRepository::create(pool, &tournament_id, &person_id, position, matches_played, ratio)
            .await
    }

    /// Get participation by ID
    pub async fn get_participation_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Participation> {
        ParticipationRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Participation not found".to_string()))
    }

    /// List all participations
    pub async fn list_participations(pool: &PgPool) -> AppResult<Vec<Participation>> {
        ParticipationRepository::list(pool).await
    }

    /// Update a participation, re-validating the effective record and
    /// recomputing the ratio from the (possibly new) tournament
    pub async fn update_participation(
        pool: &PgPool,
        id: &Uuid,
        tournament_id: Option<Uuid>,
        person_id: Option<Uuid>,
        position: Option<i32>,
        matches_played: Option<i32>,
    ) -> AppResult<Participation> {
        let existing = Self::get_participation_by_id(pool, id).await?;

        // Merge the supplied fields over the stored record so the full
        // invariant set is re-checked, not just the changed fields
        let effective_tournament = tournament_id.unwrap_or(existing.tournament_id);
        let effective_person = person_id.unwrap_or(existing.person_id);
        let effective_position = position.unwrap_or(existing.position);
        let effective_matches = matches_played.unwrap_or(existing.matches_played);

        let candidate = ParticipationCandidate {
            tournament_id: Some(effective_tournament),
            person_id: Some(effective_person),
            position: Some(effective_position),
            matches_played: Some(effective_matches),
        };
        let errors = Self::validate(pool, &candidate).await?;
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        let ratio = Self::compute_ratio(pool, &effective_tournament, effective_matches).await?;

        ParticipationRepository::update(
            pool,
            id,
            tournament_id.as_ref(),
            person_id.as_ref(),
            position,
            matches_played,
            ratio,
        )
        .await
    }

    /// Delete a participation
    pub async fn delete_participation(pool: &PgPool, id: &Uuid) -> AppResult<Participation> {
        ParticipationRepository::delete(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Participation not found".to_string()))
    }

    /// Re-fetch the tournament and compute the participation ratio from
    /// its current match total. Always reads fresh so a tournament updated
    /// between validation and persistence is not silently ignored.
    async fn compute_ratio(
        pool: &PgPool,
        tournament_id: &Uuid,
        matches_played: i32,
    ) -> AppResult<f64> {
        let tournament = TournamentRepository::find_by_id(pool, tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tournament not found".to_string()))?;

        if tournament.total_matches <= 0 {
            return Err(AppError::ValidationFailed(vec![
                "Tournament must have a valid total-matches value.".to_string(),
            ]));
        }

        Ok(participation_ratio(matches_played, tournament.total_matches))
    }
}
