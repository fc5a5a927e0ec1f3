//! Attendance model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Training attendance database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Attendance {
    pub id: Uuid,
    pub person_id: Uuid,
    pub training_id: Uuid,
    pub attended: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
