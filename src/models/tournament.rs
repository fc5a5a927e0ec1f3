//! Tournament model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tournament database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    /// Tournament date in YYYY-MM-DD form
    pub date: String,
    /// Declared number of matches; participation ratios divide by this
    pub total_matches: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
