//! Participation request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Create participation request
///
/// Fields are optional at the transport layer; the validator reports one
/// error per missing field. The participation ratio is never accepted
/// from the client.
#[derive(Debug, Deserialize)]
pub struct CreateParticipationRequest {
    pub tournament_id: Option<Uuid>,
    pub person_id: Option<Uuid>,
    pub position: Option<i32>,
    pub matches_played: Option<i32>,
}

/// Update participation request (partial)
#[derive(Debug, Deserialize)]
pub struct UpdateParticipationRequest {
    pub tournament_id: Option<Uuid>,
    pub person_id: Option<Uuid>,
    pub position: Option<i32>,
    pub matches_played: Option<i32>,
}
