//! Training request DTOs

use serde::Deserialize;

/// Create training request
///
/// Fields are optional at the transport layer; the validator reports the
/// "both required" error itself.
#[derive(Debug, Deserialize)]
pub struct CreateTrainingRequest {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Update training request (partial)
#[derive(Debug, Deserialize)]
pub struct UpdateTrainingRequest {
    pub date: Option<String>,
    pub time: Option<String>,
}
