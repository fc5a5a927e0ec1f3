//! Payment request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Create payment request
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub person_id: Uuid,
    pub payment_date: String,
    pub amount: f64,
    pub status: String,
}

/// Update payment request (partial)
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentRequest {
    pub payment_date: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
}
