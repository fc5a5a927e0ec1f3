//! Payment service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{PaymentRepository, PersonRepository},
    error::{AppError, AppResult},
    models::Payment,
    utils::time::today_utc,
    utils::validation::{PaymentCandidate, validate_payment},
};

/// Payment service for business logic
pub struct PaymentService;

impl PaymentService {
    /// Create a payment for a member; the payment date must not be in the
    /// future and the person reference must resolve
    pub async fn create_payment(
        pool: &PgPool,
        person_id: &Uuid,
        payment_date: &str,
        amount: f64,
        status: &str,
    ) -> AppResult<Payment> {
        let candidate = PaymentCandidate {
            amount: Some(amount),
            status: Some(status),
            payment_date: Some(payment_date),
        };
        let mut errors = validate_payment(&candidate, today_utc());

        if PersonRepository::find_by_id(pool, person_id).await?.is_none() {
            errors.push("Person does not exist.".to_string());
        }
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        PaymentRepository::create(pool, person_id, payment_date, amount, status).await
    }

    /// Update a payment, validating only the supplied fields
    pub async fn update_payment(
        pool: &PgPool,
        id: &Uuid,
        payment_date: Option<&str>,
        amount: Option<f64>,
        status: Option<&str>,
    ) -> AppResult<Payment> {
        let candidate = PaymentCandidate {
            amount,
            status,
            payment_date,
        };
        let errors = validate_payment(&candidate, today_utc());
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        PaymentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        PaymentRepository::update(pool, id, payment_date, amount, status).await
    }

    /// List a person's payments
    pub async fn list_payments_by_person(pool: &PgPool, person_id: &Uuid) -> AppResult<Vec<Payment>> {
        PaymentRepository::find_by_person(pool, person_id).await
    }
}
