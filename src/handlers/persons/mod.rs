//! Person management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Person routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_person))
        .route("/", get(handler::list_persons))
        .route("/{id}", get(handler::get_person))
        .route("/{id}", put(handler::update_person))
        .route("/{id}/details", get(handler::get_person_details))
        .route("/uid/{uid}", get(handler::get_person_by_uid))
        .route("/uid/{uid}/role", get(handler::get_person_role))
        .route("/role/{role}", get(handler::list_persons_by_role))
}
