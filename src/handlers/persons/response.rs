//! Person response DTOs

use serde::Serialize;

use crate::models::{Attendance, Participation, Payment, Person, Tournament, Training};

/// Role lookup response
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: String,
}

/// Consolidated view of everything the club knows about a member
#[derive(Debug, Serialize)]
pub struct PersonDetailsResponse {
    pub person: Person,
    pub trainings: Vec<Training>,
    pub attendances: Vec<Attendance>,
    pub payments: Vec<Payment>,
    pub participations: Vec<Participation>,
    pub tournaments: Vec<Tournament>,
}
