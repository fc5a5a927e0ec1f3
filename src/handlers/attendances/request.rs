//! Attendance request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Create attendance request
#[derive(Debug, Deserialize)]
pub struct CreateAttendanceRequest {
    pub person_id: Uuid,
    pub training_id: Uuid,
    pub attended: bool,
}

/// Update attendance request (only the flag can change)
#[derive(Debug, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub attended: bool,
}
