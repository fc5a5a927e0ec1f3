//! Tournament management handlers

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

/// Tournament routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_tournament))
        .route("/", get(handler::list_tournaments))
        .route("/{id}", get(handler::get_tournament))
        .route("/{id}", put(handler::update_tournament))
        .route("/{id}", delete(handler::delete_tournament))
}
