//! Training session management handlers

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

/// Training routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_training))
        .route("/", get(handler::list_trainings))
        .route("/{id}", get(handler::get_training))
        .route("/{id}", put(handler::update_training))
        .route("/{id}", delete(handler::delete_training))
}
