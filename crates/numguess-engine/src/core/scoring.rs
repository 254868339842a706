/// Points awarded for any won round.
pub const BASE_POINTS: u32 = 100;
/// Bonus per attempt left unused at the time of the win.
pub const BONUS_PER_UNUSED_ATTEMPT: u32 = 20;
/// Lower bound of a winning score.
pub const MIN_POINTS: u32 = 50;

/// Score for a round won after `attempts_used` guesses.
///
/// `max(100 + (max_attempts - attempts_used) * 20, 50)`. Lost rounds score 0
/// and never reach this function.
///
/// ```
/// use numguess_engine::score;
///
/// assert_eq!(score(1, 7), 220);
/// assert_eq!(score(4, 7), 160);
/// assert_eq!(score(7, 7), 100);
/// ```
#[must_use]
pub fn score(attempts_used: u32, max_attempts: u32) -> u32 {
    let unused = i64::from(max_attempts) - i64::from(attempts_used);
    let points = i64::from(BASE_POINTS) + unused * i64::from(BONUS_PER_UNUSED_ATTEMPT);
    let points = points.max(i64::from(MIN_POINTS));
    u32::try_from(points).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_formula_for_default_attempts() {
        for attempts in 1..=7 {
            let expected = (100 + (7 - i64::from(attempts)) * 20).max(50);
            assert_eq!(i64::from(score(attempts, 7)), expected, "attempts={attempts}");
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(score(1, 7), 220);
        assert_eq!(score(4, 7), 160);
        assert_eq!(score(5, 7), 140);
        assert_eq!(score(7, 7), 100);
    }

    #[test]
    fn test_never_below_minimum() {
        assert_eq!(score(10, 7), 50);
        assert_eq!(score(u32::MAX, 1), 50);
    }

    #[test]
    fn test_large_budget_saturates() {
        assert_eq!(score(0, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(score(3, 7), score(3, 7));
    }
}
