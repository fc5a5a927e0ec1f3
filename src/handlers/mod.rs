//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod attendances;
pub mod health;
pub mod participations;
pub mod payments;
pub mod persons;
pub mod tournaments;
pub mod trainings;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/persons", persons::routes())
        .nest("/tournaments", tournaments::routes())
        .nest("/participations", participations::routes())
        .nest("/trainings", trainings::routes())
        .nest("/attendances", attendances::routes())
        .nest("/payments", payments::routes())
}
