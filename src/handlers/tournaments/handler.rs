//! Tournament handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{error::AppResult, models::Tournament, services::TournamentService, state::AppState};

use super::{
    request::{CreateTournamentRequest, UpdateTournamentRequest},
    response::DeletedResponse,
};

/// Create a new tournament
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(payload): Json<CreateTournamentRequest>,
) -> AppResult<(StatusCode, Json<Tournament>)> {
    let tournament = TournamentService::create_tournament(
        state.db(),
        payload.name.as_deref(),
        payload.date.as_deref(),
        payload.total_matches,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(tournament)))
}

/// List all tournaments
pub async fn list_tournaments(State(state): State<AppState>) -> AppResult<Json<Vec<Tournament>>> {
    let tournaments = TournamentService::list_tournaments(state.db()).await?;
    Ok(Json(tournaments))
}

/// Get a specific tournament by ID
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Tournament>> {
    let tournament = TournamentService::get_tournament_by_id(state.db(), &id).await?;
    Ok(Json(tournament))
}

/// Update a tournament (partial)
pub async fn update_tournament(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTournamentRequest>,
) -> AppResult<Json<Tournament>> {
    let tournament = TournamentService::update_tournament(
        state.db(),
        &id,
        payload.name.as_deref(),
        payload.date.as_deref(),
        payload.total_matches,
    )
    .await?;

    Ok(Json(tournament))
}

/// Delete a tournament
pub async fn delete_tournament(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    TournamentService::delete_tournament(state.db(), &id).await?;
    Ok(Json(DeletedResponse {
        message: "Tournament deleted successfully".to_string(),
    }))
}
