//! Attendance handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{error::AppResult, models::Attendance, services::AttendanceService, state::AppState};

use super::request::{CreateAttendanceRequest, UpdateAttendanceRequest};

/// Record a person's attendance at a training session
pub async fn create_attendance(
    State(state): State<AppState>,
    Json(payload): Json<CreateAttendanceRequest>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    let attendance = AttendanceService::create_attendance(
        state.db(),
        &payload.person_id,
        &payload.training_id,
        payload.attended,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(attendance)))
}

/// Update the attended flag on an attendance record
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAttendanceRequest>,
) -> AppResult<Json<Attendance>> {
    let attendance =
        AttendanceService::update_attendance(state.db(), &id, payload.attended).await?;
    Ok(Json(attendance))
}

/// List a person's attendance records
pub async fn list_attendances_by_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Attendance>>> {
    let attendances = AttendanceService::list_attendances_by_person(state.db(), &id).await?;
    Ok(Json(attendances))
}
