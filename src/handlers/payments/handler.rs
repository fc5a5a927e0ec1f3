//! Payment handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{error::AppResult, models::Payment, services::PaymentService, state::AppState};

use super::request::{CreatePaymentRequest, UpdatePaymentRequest};

/// Record a membership payment
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = PaymentService::create_payment(
        state.db(),
        &payload.person_id,
        &payload.payment_date,
        payload.amount,
        &payload.status,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

/// Update a payment (partial)
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePaymentRequest>,
) -> AppResult<Json<Payment>> {
    let payment = PaymentService::update_payment(
        state.db(),
        &id,
        payload.payment_date.as_deref(),
        payload.amount,
        payload.status.as_deref(),
    )
    .await?;

    Ok(Json(payment))
}

/// List a person's payments
pub async fn list_payments_by_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = PaymentService::list_payments_by_person(state.db(), &id).await?;
    Ok(Json(payments))
}
