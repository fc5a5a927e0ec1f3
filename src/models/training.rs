//! Training session model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Training session database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Training {
    pub id: Uuid,
    /// Session date in YYYY-MM-DD form
    pub date: String,
    /// Time of day in HH:MM form
    pub time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
