//! Person repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Person};

/// Repository for person database operations
pub struct PersonRepository;

impl PersonRepository {
    /// Create a new person
    pub async fn create(
        pool: &PgPool,
        uid: &str,
        first_name: &str,
        last_name: &str,
        birth_date: &str,
        phone: &str,
        address: &str,
        email: &str,
        role: &str,
    ) -> AppResult<Person> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO persons (uid, first_name, last_name, birth_date, phone, address, email, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(uid)
        .bind(first_name)
        .bind(last_name)
        .bind(birth_date)
        .bind(phone)
        .bind(address)
        .bind(email)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(person)
    }

    /// Find person by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Person>> {
        let person = sqlx::query_as::<_, Person>(r#"SELECT * FROM persons WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(person)
    }

    /// Find person by external-system identifier
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> AppResult<Option<Person>> {
        let person = sqlx::query_as::<_, Person>(r#"SELECT * FROM persons WHERE uid = $1"#)
            .bind(uid)
            .fetch_optional(pool)
            .await?;

        Ok(person)
    }

    /// List persons with a given role
    pub async fn find_by_role(pool: &PgPool, role: &str) -> AppResult<Vec<Person>> {
        let persons = sqlx::query_as::<_, Person>(
            r#"SELECT * FROM persons WHERE role = $1 ORDER BY created_at DESC"#,
        )
        .bind(role)
        .fetch_all(pool)
        .await?;

        Ok(persons)
    }

    /// List all persons
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Person>> {
        let persons =
            sqlx::query_as::<_, Person>(r#"SELECT * FROM persons ORDER BY created_at DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(persons)
    }

    /// Update person (only supplied fields are applied)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        birth_date: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Person> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            UPDATE persons
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                birth_date = COALESCE($4, birth_date),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                email = COALESCE($7, email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(birth_date)
        .bind(phone)
        .bind(address)
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(person)
    }
}
