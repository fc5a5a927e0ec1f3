//! Payment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Payment};

/// Repository for payment database operations
pub struct PaymentRepository;

impl PaymentRepository {
    /// Create a new payment
    pub async fn create(
        pool: &PgPool,
        person_id: &Uuid,
        payment_date: &str,
        amount: f64,
        status: &str,
    ) -> AppResult<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (person_id, payment_date, amount, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(person_id)
        .bind(payment_date)
        .bind(amount)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(payment)
    }

    /// Find payment by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(r#"SELECT * FROM payments WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(payment)
    }

    /// List a person's payments
    pub async fn find_by_person(pool: &PgPool, person_id: &Uuid) -> AppResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"SELECT * FROM payments WHERE person_id = $1 ORDER BY payment_date DESC"#,
        )
        .bind(person_id)
        .fetch_all(pool)
        .await?;

        Ok(payments)
    }

    /// Update payment (only supplied fields are applied)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        payment_date: Option<&str>,
        amount: Option<f64>,
        status: Option<&str>,
    ) -> AppResult<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET
                payment_date = COALESCE($2, payment_date),
                amount = COALESCE($3, amount),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_date)
        .bind(amount)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(payment)
    }
}
