//! Derived metric computation

/// Compute the participation ratio for a tournament participation.
///
/// The ratio is `matches_played / total_matches`. Callers must have
/// validated that `total_matches` is positive before invoking this; the
/// participation validator rejects tournaments with a non-positive match
/// total, so the division is never degenerate in practice.
///
/// The ratio is always recomputed server-side, never taken from client
/// input, and must be refreshed whenever `matches_played` or the
/// tournament reference changes.
pub fn participation_ratio(matches_played: i32, total_matches: i32) -> f64 {
    f64::from(matches_played) / f64::from(total_matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_basic() {
        assert_eq!(participation_ratio(5, 10), 0.5);
        assert_eq!(participation_ratio(0, 10), 0.0);
        assert_eq!(participation_ratio(10, 10), 1.0);
    }

    #[test]
    fn test_ratio_is_pure() {
        // Same inputs always yield the same result
        assert_eq!(participation_ratio(3, 8), participation_ratio(3, 8));
    }
}
