//! Tournament repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Tournament};

/// Repository for tournament database operations
pub struct TournamentRepository;

impl TournamentRepository {
    /// Create a new tournament
    pub async fn create(
        pool: &PgPool,
        name: &str,
        date: &str,
        total_matches: i32,
    ) -> AppResult<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            INSERT INTO tournaments (name, date, total_matches)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(date)
        .bind(total_matches)
        .fetch_one(pool)
        .await?;

        Ok(tournament)
    }

    /// Find tournament by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Tournament>> {
        let tournament = sqlx::query_as::<_, Tournament>(r#"SELECT * FROM tournaments WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(tournament)
    }

    /// List all tournaments
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Tournament>> {
        let tournaments =
            sqlx::query_as::<_, Tournament>(r#"SELECT * FROM tournaments ORDER BY created_at DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(tournaments)
    }

    /// List the tournaments a person has participated in
    pub async fn find_by_participant(pool: &PgPool, person_id: &Uuid) -> AppResult<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(
            r#"
            SELECT t.*
            FROM tournaments t
            JOIN participations p ON p.tournament_id = t.id
            WHERE p.person_id = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(person_id)
        .fetch_all(pool)
        .await?;

        Ok(tournaments)
    }

    /// Update tournament (only supplied fields are applied)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        date: Option<&str>,
        total_matches: Option<i32>,
    ) -> AppResult<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            UPDATE tournaments
            SET
                name = COALESCE($2, name),
                date = COALESCE($3, date),
                total_matches = COALESCE($4, total_matches),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(date)
        .bind(total_matches)
        .fetch_one(pool)
        .await?;

        Ok(tournament)
    }

    /// Delete tournament, returning the removed row if it existed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<Option<Tournament>> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"DELETE FROM tournaments WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(tournament)
    }
}
