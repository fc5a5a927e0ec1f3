//! Time utilities
//!
//! Date-sensitive validators (trainings must not be in the past, payments
//! must not be in the future) take the current day as a parameter so tests
//! can fix "now"; production callers pass [`today_utc`].

use chrono::{DateTime, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Get the current UTC calendar day (time-of-day zeroed out)
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a date string in YYYY-MM-DD format
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let d = parse_date("2024-01-15");
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15));

        assert!(parse_date("not a date").is_none());
        assert!(parse_date("2024-13-01").is_none()); // no 13th month
        assert!(parse_date("2023-02-29").is_none()); // not a leap year
    }

    #[test]
    fn test_today_is_parseable() {
        let today = today_utc();
        let formatted = today.format("%Y-%m-%d").to_string();
        assert_eq!(parse_date(&formatted), Some(today));
    }
}
