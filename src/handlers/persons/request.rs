//! Person request DTOs

use serde::Deserialize;

/// Create person request (all fields required at the transport layer,
/// except the role which defaults to "user")
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub role: Option<String>,
}

/// Update person request (partial; only supplied fields are validated
/// and applied)
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
}
