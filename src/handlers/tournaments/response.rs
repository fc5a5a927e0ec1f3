//! Tournament response DTOs

use serde::Serialize;

/// Deletion confirmation
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
