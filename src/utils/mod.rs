//! Utility functions

pub mod metrics;
pub mod time;
pub mod validation;

pub use metrics::participation_ratio;
pub use time::{now_utc, parse_date, today_utc};
pub use validation::{validate_payment, validate_person, validate_tournament, validate_training};
