//! Person model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Club member database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    /// External-system identifier used for cross-system lookup
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    /// Stored as text; only the lexical YYYY-MM-DD shape is validated
    pub birth_date: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Check if the person has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
