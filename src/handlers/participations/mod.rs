//! Participation management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Participation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_participation))
        .route("/", get(handler::list_participations))
        .route("/{id}", get(handler::get_participation))
        .route("/{id}", put(handler::update_participation))
        .route("/{id}", delete(handler::delete_participation))
}
