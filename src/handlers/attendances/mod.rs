//! Attendance management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Attendance routes (no deletion; attendance history is kept)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_attendance))
        .route("/{id}", put(handler::update_attendance))
        .route("/person/{id}", get(handler::list_attendances_by_person))
}
