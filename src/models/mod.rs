//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod attendance;
pub mod participation;
pub mod payment;
pub mod person;
pub mod tournament;
pub mod training;

pub use attendance::*;
pub use participation::*;
pub use payment::*;
pub use person::*;
pub use tournament::*;
pub use training::*;
