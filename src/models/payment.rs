//! Payment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Membership payment database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub person_id: Uuid,
    /// Payment date in YYYY-MM-DD form
    pub payment_date: String,
    pub amount: f64,
    /// Either "Paid" or "Pending"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Check if the payment has been settled
    pub fn is_paid(&self) -> bool {
        self.status == crate::constants::payment_status::PAID
    }
}
