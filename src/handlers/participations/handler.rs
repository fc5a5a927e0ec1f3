//! Participation handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppResult, models::Participation, services::ParticipationService, state::AppState,
};

use super::{
    request::{CreateParticipationRequest, UpdateParticipationRequest},
    response::DeletedResponse,
};

/// Register a person's participation in a tournament
pub async fn create_participation(
    State(state): State<AppState>,
    Json(payload): Json<CreateParticipationRequest>,
) -> AppResult<(StatusCode, Json<Participation>)> {
    let participation = ParticipationService::create_participation(
        state.db(),
        payload.tournament_id,
        payload.person_id,
        payload.position,
        payload.matches_played,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(participation)))
}

/// List all participations
pub async fn list_participations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Participation>>> {
    let participations = ParticipationService::list_participations(state.db()).await?;
    Ok(Json(participations))
}

/// Get a specific participation by ID
pub async fn get_participation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Participation>> {
    let participation = ParticipationService::get_participation_by_id(state.db(), &id).await?;
    Ok(Json(participation))
}

/// Update a participation (partial; ratio is recomputed server-side)
pub async fn update_participation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateParticipationRequest>,
) -> AppResult<Json<Participation>> {
    let participation = ParticipationService::update_participation(
        state.db(),
        &id,
        payload.tournament_id,
        payload.person_id,
        payload.position,
        payload.matches_played,
    )
    .await?;

    Ok(Json(participation))
}

/// Delete a participation
pub async fn delete_participation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    ParticipationService::delete_participation(state.db(), &id).await?;
    Ok(Json(DeletedResponse {
        message: "Participation deleted successfully".to_string(),
    }))
}
