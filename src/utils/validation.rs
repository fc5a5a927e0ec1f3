//! Input validation
//!
//! Hand-written field validators for the club entities. Each validator
//! checks a candidate's fields against format/range rules and returns a
//! list of human-readable error messages; an empty list means the
//! candidate is accepted. On partial updates only the supplied fields are
//! checked, so every candidate field is optional.
//!
//! All validators accumulate errors, except the training validator which
//! stops at the first failing rule.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use uuid::Uuid;

use crate::constants::payment_status;
use crate::models::{Person, Tournament};
use crate::utils::time::parse_date;

/// Letters (including accented Latin characters) and spaces only
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s\u{00C0}-\u{00FF}]+$").unwrap());

/// Lexical YYYY-MM-DD shape; calendar validity is a separate concern
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Exactly ten digits
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Alphanumeric characters and spaces only
static TOURNAMENT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s]+$").unwrap());

/// HH:MM time of day
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

fn contains_quotes(s: &str) -> bool {
    s.contains('"') || s.contains('\'')
}

/// Candidate person fields (full on create, partial on update)
#[derive(Debug, Default)]
pub struct PersonCandidate<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub birth_date: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// Validate a person's fields, accumulating all rule violations.
///
/// The birth date is checked only for its lexical YYYY-MM-DD shape, not
/// for calendar validity. The training and payment validators do parse
/// their dates; this asymmetry is intentional.
pub fn validate_person(candidate: &PersonCandidate) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(first_name) = candidate.first_name {
        if !NAME_RE.is_match(first_name) {
            errors.push("First name must contain only letters and spaces.".to_string());
        }
    }

    if let Some(last_name) = candidate.last_name {
        if !NAME_RE.is_match(last_name) {
            errors.push("Last name must contain only letters and spaces.".to_string());
        }
    }

    if let Some(birth_date) = candidate.birth_date {
        if !DATE_RE.is_match(birth_date) {
            errors.push("Birth date must be in YYYY-MM-DD format.".to_string());
        }
    }

    if let Some(phone) = candidate.phone {
        if !PHONE_RE.is_match(phone) {
            errors.push("Phone must contain exactly 10 digits.".to_string());
        }
    }

    if let Some(email) = candidate.email {
        if !EMAIL_RE.is_match(email) {
            errors.push("Email must be a valid address (user@example.com).".to_string());
        }
    }

    if let Some(address) = candidate.address {
        if contains_quotes(address) {
            errors.push("Address must not contain quote characters.".to_string());
        }
    }

    errors
}

/// Candidate tournament fields (full on create, partial on update)
#[derive(Debug, Default)]
pub struct TournamentCandidate<'a> {
    pub name: Option<&'a str>,
    pub date: Option<&'a str>,
    pub total_matches: Option<i32>,
}

/// Validate a tournament's fields, accumulating all rule violations.
///
/// When `require_all` is set (creation), a missing field adds a single
/// combined "all fields are required" error on top of the per-field
/// checks. The name is subject to two independent rules: the alphanumeric
/// pattern and the quote-character ban.
pub fn validate_tournament(candidate: &TournamentCandidate, require_all: bool) -> Vec<String> {
    let mut errors = Vec::new();

    if require_all
        && (candidate.name.is_none()
            || candidate.date.is_none()
            || candidate.total_matches.is_none())
    {
        errors.push("Name, date and total matches are all required.".to_string());
    }

    if let Some(name) = candidate.name {
        if !TOURNAMENT_NAME_RE.is_match(name) {
            errors.push("Tournament name must contain only letters, numbers and spaces.".to_string());
        }
        if contains_quotes(name) {
            errors.push("Tournament name must not contain quote characters.".to_string());
        }
    }

    if let Some(date) = candidate.date {
        if !DATE_RE.is_match(date) {
            errors.push("Tournament date must be in YYYY-MM-DD format.".to_string());
        }
    }

    if let Some(total_matches) = candidate.total_matches {
        if total_matches < 0 {
            errors.push("Total matches must be a non-negative integer.".to_string());
        }
    }

    errors
}

/// Candidate participation fields (full on create, partial on update)
#[derive(Debug, Default)]
pub struct ParticipationCandidate {
    pub tournament_id: Option<Uuid>,
    pub person_id: Option<Uuid>,
    pub position: Option<i32>,
    pub matches_played: Option<i32>,
}

/// Validate a participation's own fields, accumulating all violations.
///
/// Each missing field contributes exactly one error. The cross-reference
/// checks (tournament/person existence and the matches-played ceiling)
/// need repository lookups and live in the participation service.
pub fn validate_participation_fields(candidate: &ParticipationCandidate) -> Vec<String> {
    let mut errors = Vec::new();

    if candidate.tournament_id.is_none() {
        errors.push("Tournament reference is required.".to_string());
    }
    if candidate.person_id.is_none() {
        errors.push("Person reference is required.".to_string());
    }
    if candidate.position.is_none() {
        errors.push("Position obtained is required.".to_string());
    }
    if candidate.matches_played.is_none() {
        errors.push("Matches played is required.".to_string());
    }

    if let Some(position) = candidate.position {
        if position < 1 {
            errors.push("Position obtained must be at least 1.".to_string());
        }
    }

    if let Some(matches_played) = candidate.matches_played {
        if matches_played < 0 {
            errors.push("Matches played must not be negative.".to_string());
        }
    }

    errors
}

/// Check a participation candidate against the outcome of its reference
/// lookups. `tournament` and `person` are the fetched records (`None`
/// when the lookup found nothing); a reference that was never supplied
/// is already reported by [`validate_participation_fields`] and is
/// skipped here.
///
/// A missing tournament short-circuits the total-matches checks, since
/// there is nothing to compare against. All other checks still run.
pub fn validate_participation_references(
    candidate: &ParticipationCandidate,
    tournament: Option<&Tournament>,
    person: Option<&Person>,
) -> Vec<String> {
    let mut errors = Vec::new();

    if candidate.tournament_id.is_some() {
        match tournament {
            None => errors.push("Tournament does not exist.".to_string()),
            Some(tournament) => {
                if tournament.total_matches <= 0 {
                    errors.push("Tournament must have a valid total-matches value.".to_string());
                } else if let Some(matches_played) = candidate.matches_played {
                    if matches_played > tournament.total_matches {
                        errors.push(
                            "Matches played cannot exceed the tournament's total matches."
                                .to_string(),
                        );
                    }
                }
            }
        }
    }

    if candidate.person_id.is_some() && person.is_none() {
        errors.push("Person does not exist.".to_string());
    }

    errors
}

/// Validate training session fields against the given current day.
///
/// Unlike the other validators this one stops at the first failing rule,
/// so the returned list holds at most one message. The date comparison is
/// date-only: a training scheduled for today is accepted regardless of
/// time of day. When `require_all` is set (creation), both fields must be
/// present.
pub fn validate_training(
    date: Option<&str>,
    time: Option<&str>,
    require_all: bool,
    today: NaiveDate,
) -> Vec<String> {
    if require_all && (date.is_none() || time.is_none()) {
        return vec!["Date and time are both required.".to_string()];
    }

    if let Some(date) = date {
        if !DATE_RE.is_match(date) {
            return vec!["Training date must be in YYYY-MM-DD format.".to_string()];
        }
        match parse_date(date) {
            Some(parsed) if parsed < today => {
                return vec!["Trainings cannot be scheduled in the past.".to_string()];
            }
            Some(_) => {}
            None => {
                return vec!["Training date must be a real calendar date.".to_string()];
            }
        }
    }

    if let Some(time) = time {
        if !TIME_RE.is_match(time) {
            return vec!["Training time must be in HH:MM format.".to_string()];
        }
    }

    Vec::new()
}

/// Candidate payment fields (full on create, partial on update)
#[derive(Debug, Default)]
pub struct PaymentCandidate<'a> {
    pub amount: Option<f64>,
    pub status: Option<&'a str>,
    pub payment_date: Option<&'a str>,
}

/// Validate a payment's fields against the given current day, accumulating
/// all rule violations. The date comparison is date-only: a payment dated
/// today is accepted.
pub fn validate_payment(candidate: &PaymentCandidate, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(amount) = candidate.amount {
        if amount <= 0.0 {
            errors.push("Amount must be greater than zero.".to_string());
        }
    }

    if let Some(status) = candidate.status {
        if !payment_status::ALL.contains(&status) {
            errors.push("Status must be either \"Paid\" or \"Pending\".".to_string());
        }
    }

    if let Some(payment_date) = candidate.payment_date {
        if !DATE_RE.is_match(payment_date) {
            errors.push("Payment date must be in YYYY-MM-DD format.".to_string());
        } else {
            match parse_date(payment_date) {
                Some(parsed) if parsed > today => {
                    errors.push("Payment date cannot be in the future.".to_string());
                }
                Some(_) => {}
                None => {
                    errors.push("Payment date must be a real calendar date.".to_string());
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn tournament_with_total(total_matches: i32) -> Tournament {
        Tournament {
            id: Uuid::new_v4(),
            name: "Spring Cup".to_string(),
            date: "2025-06-01".to_string(),
            total_matches,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_person() -> Person {
        Person {
            id: Uuid::new_v4(),
            uid: "ext-100".to_string(),
            first_name: "Jose".to_string(),
            last_name: "Garcia".to_string(),
            birth_date: "1990-05-05".to_string(),
            phone: "5512345678".to_string(),
            address: "Av. Central 100".to_string(),
            email: "jose@example.com".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn full_candidate(matches_played: i32) -> ParticipationCandidate {
        ParticipationCandidate {
            tournament_id: Some(Uuid::new_v4()),
            person_id: Some(Uuid::new_v4()),
            position: Some(2),
            matches_played: Some(matches_played),
        }
    }

    #[test]
    fn test_validate_person_accepts_valid_member() {
        let candidate = PersonCandidate {
            first_name: Some("Jose Luis"),
            last_name: Some("Garcia"),
            birth_date: Some("1990-05-05"),
            phone: Some("5512345678"),
            address: Some("Av. Central 100"),
            email: Some("jose@example.com"),
        };
        assert!(validate_person(&candidate).is_empty());
    }

    #[test]
    fn test_validate_person_accepts_accented_names() {
        let candidate = PersonCandidate {
            first_name: Some("José"),
            last_name: Some("Muñoz Ibáñez"),
            ..Default::default()
        };
        assert!(validate_person(&candidate).is_empty());
    }

    #[test]
    fn test_validate_person_rejects_digits_and_symbols_in_names() {
        let candidate = PersonCandidate {
            first_name: Some("J0se"),
            last_name: Some("Garcia!"),
            ..Default::default()
        };
        let errors = validate_person(&candidate);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_person_phone_must_be_ten_digits() {
        for phone in ["123456789", "12345678901", "55123456ab", ""] {
            let candidate = PersonCandidate {
                phone: Some(phone),
                ..Default::default()
            };
            assert_eq!(validate_person(&candidate).len(), 1, "phone {phone:?}");
        }

        let candidate = PersonCandidate {
            phone: Some("5512345678"),
            ..Default::default()
        };
        assert!(validate_person(&candidate).is_empty());
    }

    #[test]
    fn test_validate_person_email_format() {
        for email in ["invalid", "@example.com", "user@", "user@domain", "a b@c.d"] {
            let candidate = PersonCandidate {
                email: Some(email),
                ..Default::default()
            };
            assert_eq!(validate_person(&candidate).len(), 1, "email {email:?}");
        }
    }

    #[test]
    fn test_validate_person_address_rejects_quotes() {
        for address in ["Main St \"5\"", "O'Brien Road 3"] {
            let candidate = PersonCandidate {
                address: Some(address),
                ..Default::default()
            };
            assert_eq!(validate_person(&candidate).len(), 1);
        }
    }

    #[test]
    fn test_validate_person_birth_date_is_lexical_only() {
        // Shape is checked, calendar validity is not: a 13th month passes
        let candidate = PersonCandidate {
            birth_date: Some("1990-13-45"),
            ..Default::default()
        };
        assert!(validate_person(&candidate).is_empty());

        let candidate = PersonCandidate {
            birth_date: Some("05-05-1990"),
            ..Default::default()
        };
        assert_eq!(validate_person(&candidate).len(), 1);
    }

    #[test]
    fn test_validate_person_partial_update_skips_absent_fields() {
        let candidate = PersonCandidate {
            phone: Some("5512345678"),
            ..Default::default()
        };
        assert!(validate_person(&candidate).is_empty());
    }

    #[test]
    fn test_validate_tournament_accepts_valid() {
        let candidate = TournamentCandidate {
            name: Some("Spring Cup 2025"),
            date: Some("2025-06-01"),
            total_matches: Some(10),
        };
        assert!(validate_tournament(&candidate, true).is_empty());
    }

    #[test]
    fn test_validate_tournament_requires_all_fields_on_create() {
        let candidate = TournamentCandidate {
            name: Some("Spring Cup"),
            date: None,
            total_matches: Some(10),
        };
        let errors = validate_tournament(&candidate, true);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("required"));

        // Partial update: the same candidate is fine
        assert!(validate_tournament(&candidate, false).is_empty());
    }

    #[test]
    fn test_validate_tournament_name_checks_are_independent() {
        // Quotes fail both the alphanumeric pattern and the quote ban
        let candidate = TournamentCandidate {
            name: Some("Winter \"Open\""),
            date: Some("2025-12-01"),
            total_matches: Some(5),
        };
        assert_eq!(validate_tournament(&candidate, true).len(), 2);
    }

    #[test]
    fn test_validate_tournament_rejects_negative_matches() {
        let candidate = TournamentCandidate {
            name: Some("Cup"),
            date: Some("2025-06-01"),
            total_matches: Some(-1),
        };
        assert_eq!(validate_tournament(&candidate, true).len(), 1);
    }

    #[test]
    fn test_validate_participation_fields_required() {
        let errors = validate_participation_fields(&ParticipationCandidate::default());
        // One error per missing field
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validate_participation_fields_ranges() {
        let candidate = ParticipationCandidate {
            tournament_id: Some(Uuid::new_v4()),
            person_id: Some(Uuid::new_v4()),
            position: Some(0),
            matches_played: Some(-3),
        };
        let errors = validate_participation_fields(&candidate);
        assert_eq!(errors.len(), 2);

        let candidate = ParticipationCandidate {
            position: Some(2),
            matches_played: Some(0),
            ..candidate
        };
        assert!(validate_participation_fields(&candidate).is_empty());
    }

    #[test]
    fn test_participation_references_accept_matches_within_total() {
        let tournament = tournament_with_total(10);
        let person = sample_person();
        let errors =
            validate_participation_references(&full_candidate(10), Some(&tournament), Some(&person));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_participation_references_reject_matches_over_total() {
        let tournament = tournament_with_total(10);
        let person = sample_person();
        let errors =
            validate_participation_references(&full_candidate(12), Some(&tournament), Some(&person));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("exceed"));
    }

    #[test]
    fn test_participation_references_reject_zero_total_matches() {
        // A zero-match tournament can never yield a ratio; the ceiling
        // comparison is skipped in favor of the total-matches error
        let person = sample_person();
        for total in [0, -1] {
            let tournament = tournament_with_total(total);
            let errors = validate_participation_references(
                &full_candidate(3),
                Some(&tournament),
                Some(&person),
            );
            assert_eq!(errors.len(), 1, "total {total}");
            assert!(errors[0].contains("total-matches"));
        }
    }

    #[test]
    fn test_participation_references_reject_unknown_tournament() {
        let person = sample_person();
        let errors = validate_participation_references(&full_candidate(12), None, Some(&person));
        // The ceiling check is skipped when the tournament is unknown
        assert_eq!(errors, vec!["Tournament does not exist.".to_string()]);
    }

    #[test]
    fn test_participation_references_reject_unknown_person() {
        let tournament = tournament_with_total(10);
        let errors = validate_participation_references(&full_candidate(5), Some(&tournament), None);
        assert_eq!(errors, vec!["Person does not exist.".to_string()]);
    }

    #[test]
    fn test_participation_references_accumulate_both_missing() {
        let errors = validate_participation_references(&full_candidate(5), None, None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_participation_references_skip_unsupplied_ids() {
        // Absent references are the field validator's concern
        let errors = validate_participation_references(&ParticipationCandidate::default(), None, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_training_rejects_past_dates() {
        let errors = validate_training(Some("2020-01-01"), Some("10:00"), true, fixed_today());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("past"));
    }

    #[test]
    fn test_validate_training_accepts_today_and_future() {
        assert!(validate_training(Some("2025-06-15"), Some("10:00"), true, fixed_today()).is_empty());
        assert!(validate_training(Some("2025-07-01"), Some("18:30"), true, fixed_today()).is_empty());
    }

    #[test]
    fn test_validate_training_short_circuits() {
        // Bad date and bad time: only the date error is reported
        let errors = validate_training(Some("01-01-2030"), Some("25h"), true, fixed_today());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_validate_training_requires_both_fields() {
        let errors = validate_training(Some("2030-01-01"), None, true, fixed_today());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("required"));
    }

    #[test]
    fn test_validate_training_time_format() {
        let errors = validate_training(Some("2030-01-01"), Some("9:00"), true, fixed_today());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("HH:MM"));
    }

    #[test]
    fn test_validate_payment_rejects_future_dates() {
        let candidate = PaymentCandidate {
            amount: Some(50.0),
            status: Some("Paid"),
            payment_date: Some("2099-01-01"),
        };
        let errors = validate_payment(&candidate, fixed_today());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("future"));
    }

    #[test]
    fn test_validate_payment_accumulates_errors() {
        let candidate = PaymentCandidate {
            amount: Some(0.0),
            status: Some("Settled"),
            payment_date: Some("2025-02-30"), // shape is right, date is not real
        };
        let errors = validate_payment(&candidate, fixed_today());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_payment_accepts_valid() {
        let candidate = PaymentCandidate {
            amount: Some(50.0),
            status: Some("Pending"),
            payment_date: Some("2025-06-15"),
        };
        assert!(validate_payment(&candidate, fixed_today()).is_empty());
    }
}
