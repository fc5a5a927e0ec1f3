//! Attendance service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AttendanceRepository, PersonRepository, TrainingRepository},
    error::{AppError, AppResult},
    models::Attendance,
};

/// Attendance service for business logic
pub struct AttendanceService;

impl AttendanceService {
    /// Create an attendance record; both references must resolve.
    ///
    /// Unresolvable references are reported in the validation error list
    /// rather than as a 404, matching the other reference checks.
    pub async fn create_attendance(
        pool: &PgPool,
        person_id: &Uuid,
        training_id: &Uuid,
        attended: bool,
    ) -> AppResult<Attendance> {
        let mut errors = Vec::new();

        if PersonRepository::find_by_id(pool, person_id).await?.is_none() {
            errors.push("Person does not exist.".to_string());
        }
        if TrainingRepository::find_by_id(pool, training_id).await?.is_none() {
            errors.push("Training does not exist.".to_string());
        }
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        AttendanceRepository::create(pool, person_id, training_id, attended).await
    }

    /// Update the attended flag on an existing record
    pub async fn update_attendance(pool: &PgPool, id: &Uuid, attended: bool) -> AppResult<Attendance> {
        AttendanceRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attendance not found".to_string()))?;

        AttendanceRepository::update(pool, id, attended).await
    }

    /// List a person's attendance records
    pub async fn list_attendances_by_person(
        pool: &PgPool,
        person_id: &Uuid,
    ) -> AppResult<Vec<Attendance>> {
        AttendanceRepository::find_by_person(pool, person_id).await
    }
}
