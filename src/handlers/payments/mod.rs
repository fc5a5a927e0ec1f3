//! Payment management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Payment routes (no deletion; payment history is kept)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_payment))
        .route("/{id}", put(handler::update_payment))
        .route("/person/{id}", get(handler::list_payments_by_person))
}
