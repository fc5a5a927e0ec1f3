//! Tournament request DTOs

use serde::Deserialize;

/// Create tournament request
///
/// Fields are optional at the transport layer so the validator can report
/// the combined "all fields are required" error itself instead of a bare
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub total_matches: Option<i32>,
}

/// Update tournament request (partial)
#[derive(Debug, Deserialize)]
pub struct UpdateTournamentRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub total_matches: Option<i32>,
}
