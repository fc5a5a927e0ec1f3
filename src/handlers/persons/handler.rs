//! Person handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{error::AppResult, models::Person, services::PersonService, state::AppState};

use super::{
    request::{CreatePersonRequest, UpdatePersonRequest},
    response::{PersonDetailsResponse, RoleResponse},
};

/// Register a new club member
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonRequest>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let person = PersonService::create_person(
        state.db(),
        &payload.uid,
        &payload.first_name,
        &payload.last_name,
        &payload.birth_date,
        &payload.phone,
        &payload.address,
        &payload.email,
        payload.role.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(person)))
}

/// List all club members
pub async fn list_persons(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let persons = PersonService::list_persons(state.db()).await?;
    Ok(Json(persons))
}

/// Get a specific person by ID
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Person>> {
    let person = PersonService::get_person_by_id(state.db(), &id).await?;
    Ok(Json(person))
}

/// Get a person by external-system identifier
pub async fn get_person_by_uid(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<Person>> {
    let person = PersonService::get_person_by_uid(state.db(), &uid).await?;
    Ok(Json(person))
}

/// Get only a person's role, looked up by external-system identifier
pub async fn get_person_role(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<RoleResponse>> {
    let person = PersonService::get_person_by_uid(state.db(), &uid).await?;
    Ok(Json(RoleResponse { role: person.role }))
}

/// List persons with a given role
pub async fn list_persons_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> AppResult<Json<Vec<Person>>> {
    let persons = PersonService::list_persons_by_role(state.db(), &role).await?;
    Ok(Json(persons))
}

/// Update a person's profile (partial)
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePersonRequest>,
) -> AppResult<Json<Person>> {
    let person = PersonService::update_person(
        state.db(),
        &id,
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
        payload.birth_date.as_deref(),
        payload.phone.as_deref(),
        payload.address.as_deref(),
        payload.email.as_deref(),
    )
    .await?;

    Ok(Json(person))
}

/// Get the consolidated view of a member and their related records
pub async fn get_person_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PersonDetailsResponse>> {
    let details = PersonService::get_person_details(state.db(), &id).await?;
    Ok(Json(details))
}
