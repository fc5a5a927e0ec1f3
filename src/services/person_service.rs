//! Person service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{
        AttendanceRepository, ParticipationRepository, PaymentRepository, PersonRepository,
        TournamentRepository, TrainingRepository,
    },
    error::{AppError, AppResult},
    handlers::persons::response::PersonDetailsResponse,
    models::Person,
    utils::validation::{PersonCandidate, validate_person},
};

/// Person service for business logic
pub struct PersonService;

impl PersonService {
    /// Create a new club member
    pub async fn create_person(
        pool: &PgPool,
        uid: &str,
        first_name: &str,
        last_name: &str,
        birth_date: &str,
        phone: &str,
        address: &str,
        email: &str,
        role: Option<&str>,
    ) -> AppResult<Person> {
        let candidate = PersonCandidate {
            first_name: Some(first_name),
            last_name: Some(last_name),
            birth_date: Some(birth_date),
            phone: Some(phone),
            address: Some(address),
            email: Some(email),
        };
        let errors = validate_person(&candidate);
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        // Email uniqueness is the database's job; a unique violation maps
        // to AlreadyExists in the sqlx error conversion.
        PersonRepository::create(
            pool,
            uid,
            first_name,
            last_name,
            birth_date,
            phone,
            address,
            email,
            role.unwrap_or(roles::DEFAULT),
        )
        .await
    }

    /// Get person by ID
    pub async fn get_person_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Person> {
        PersonRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))
    }

    /// Get person by external-system identifier
    pub async fn get_person_by_uid(pool: &PgPool, uid: &str) -> AppResult<Person> {
        PersonRepository::find_by_uid(pool, uid)
            .await?
            .ok_or_else(|| AppError::NotFound("No person found with that UID".to_string()))
    }

    /// List persons with a given role
    pub async fn list_persons_by_role(pool: &PgPool, role: &str) -> AppResult<Vec<Person>> {
        let persons = PersonRepository::find_by_role(pool, role).await?;
        if persons.is_empty() {
            return Err(AppError::NotFound(
                "No persons found with that role".to_string(),
            ));
        }
        Ok(persons)
    }

    /// List all persons
    pub async fn list_persons(pool: &PgPool) -> AppResult<Vec<Person>> {
        PersonRepository::list(pool).await
    }

    /// Update a person, validating only the supplied fields
    pub async fn update_person(
        pool: &PgPool,
        id: &Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        birth_date: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Person> {
        let candidate = PersonCandidate {
            first_name,
            last_name,
            birth_date,
            phone,
            address,
            email,
        };
        let errors = validate_person(&candidate);
        if !errors.is_empty() {
            return Err(AppError::ValidationFailed(errors));
        }

        // 404 before attempting the partial update
        Self::get_person_by_id(pool, id).await?;

        PersonRepository::update(pool, id, first_name, last_name, birth_date, phone, address, email)
            .await
    }

    /// Get the consolidated view of a person: the member record plus all
    /// trainings, their attendances, payments, participations and the
    /// tournaments those participations refer to.
    pub async fn get_person_details(pool: &PgPool, id: &Uuid) -> AppResult<PersonDetailsResponse> {
        let person = Self::get_person_by_id(pool, id).await?;

        let trainings = TrainingRepository::list(pool).await?;
        let attendances = AttendanceRepository::find_by_person(pool, id).await?;
        let payments = PaymentRepository::find_by_person(pool, id).await?;
        let participations = ParticipationRepository::find_by_person(pool, id).await?;
        let tournaments = TournamentRepository::find_by_participant(pool, id).await?;

        Ok(PersonDetailsResponse {
            person,
            trainings,
            attendances,
            payments,
            participations,
            tournaments,
        })
    }
}
