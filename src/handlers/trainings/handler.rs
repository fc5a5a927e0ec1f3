//! Training handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{error::AppResult, models::Training, services::TrainingService, state::AppState};

use super::{
    request::{CreateTrainingRequest, UpdateTrainingRequest},
    response::DeletedResponse,
};

/// Schedule a new training session
pub async fn create_training(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrainingRequest>,
) -> AppResult<(StatusCode, Json<Training>)> {
    let training = TrainingService::create_training(
        state.db(),
        payload.date.as_deref(),
        payload.time.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(training)))
}

/// List all training sessions
pub async fn list_trainings(State(state): State<AppState>) -> AppResult<Json<Vec<Training>>> {
    let trainings = TrainingService::list_trainings(state.db()).await?;
    Ok(Json(trainings))
}

/// Get a specific training session by ID
pub async fn get_training(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Training>> {
    let training = TrainingService::get_training_by_id(state.db(), &id).await?;
    Ok(Json(training))
}

/// Update a training session (partial)
pub async fn update_training(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTrainingRequest>,
) -> AppResult<Json<Training>> {
    let training = TrainingService::update_training(
        state.db(),
        &id,
        payload.date.as_deref(),
        payload.time.as_deref(),
    )
    .await?;

    Ok(Json(training))
}

/// Delete a training session
pub async fn delete_training(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    TrainingService::delete_training(state.db(), &id).await?;
    Ok(Json(DeletedResponse {
        message: "Training deleted successfully".to_string(),
    }))
}
