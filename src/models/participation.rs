//! Participation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tournament participation database model
///
/// Links a person to a tournament. The `participation_ratio` is derived
/// server-side from `matches_played` and the tournament's match total and
/// is never accepted from client input.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Participation {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub person_id: Uuid,
    /// Final position obtained (1 = first place)
    pub position: i32,
    pub matches_played: i32,
    pub participation_ratio: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
