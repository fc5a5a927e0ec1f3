//! Clubmanager - Sports Club Management API
//!
//! This library provides the core functionality for the Clubmanager platform,
//! a REST API that manages a sports club's membership, training sessions,
//! attendance, tournaments, tournament participation, and payments.
//!
//! # Features
//!
//! - CRUD endpoints for six entity collections
//! - Hand-written field validation with accumulated error lists
//! - Derived participation ratio kept consistent with tournament match counts
//! - Cross-collection reference checks at validation time
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and validation orchestration
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
