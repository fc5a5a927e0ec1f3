//! Participation repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Participation};

/// Repository for participation database operations
pub struct ParticipationRepository;

impl ParticipationRepository {
    /// Create a new participation
    pub async fn create(
        pool: &PgPool,
        tournament_id: &Uuid,
        person_id: &Uuid,
        position: i32,
        matches_played: i32,
        participation_ratio: f64,
    ) -> AppResult<Participation> {
        let participation = sqlx::query_as::<_, Participation>(
            r#"
            INSERT INTO participations (tournament_id, person_id, position, matches_played, participation_ratio)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(tournament_id)
        .bind(person_id)
        .bind(position)
        .bind(matches_played)
        .bind(participation_ratio)
        .fetch_one(pool)
        .await?;

        Ok(participation)
    }

    /// Find participation by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Participation>> {
        let participation =
            sqlx::query_as::<_, Participation>(r#"SELECT * FROM participations WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(participation)
    }

    /// List all participations
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Participation>> {
        let participations = sqlx::query_as::<_, Participation>(
            r#"SELECT * FROM participations ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(participations)
    }

    /// List a person's participations
    pub async fn find_by_person(pool: &PgPool, person_id: &Uuid) -> AppResult<Vec<Participation>> {
        let participations = sqlx::query_as::<_, Participation>(
            r#"SELECT * FROM participations WHERE person_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(person_id)
        .fetch_all(pool)
        .await?;

        Ok(participations)
    }

    /// Update participation (only supplied fields are applied)
    ///
    /// The ratio is always rewritten: the caller recomputes it from the
    /// effective matches-played value and the referenced tournament.
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        tournament_id: Option<&Uuid>,
        person_id: Option<&Uuid>,
        position: Option<i32>,
        matches_played: Option<i32>,
        participation_ratio: f64,
    ) -> AppResult<Participation> {
        let participation = sqlx::query_as::<_, Participation>(
            r#"
            UPDATE participations
            SET
                tournament_id = COALESCE($2, tournament_id),
                person_id = COALESCE($3, person_id),
                position = COALESCE($4, position),
                matches_played = COALESCE($5, matches_played),
                participation_ratio = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(tournament_id)
        .bind(person_id)
        .bind(position)
        .bind(matches_played)
        .bind(participation_ratio)
        .fetch_one(pool)
        .await?;

        Ok(participation)
    }

    /// Delete participation, returning the removed row if it existed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<Option<Participation>> {
        let participation = sqlx::query_as::<_, Participation>(
            r#"DELETE FROM participations WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(participation)
    }
}
