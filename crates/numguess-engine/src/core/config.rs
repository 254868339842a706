use std::ops::RangeInclusive;

use serde::Serialize;

use crate::ConfigError;

/// Fixed parameters of a play-through.
///
/// A `GameConfig` is validated on construction and never changes afterwards:
///
/// - `max_attempts` guesses are allowed per round
/// - `max_rounds` rounds make up a session
/// - targets and guesses lie in `range_low..=range_high`
/// - a hint is given after the `hint_after_attempts`-th accepted guess
///
/// # Example
///
/// ```
/// use numguess_engine::GameConfig;
///
/// let config = GameConfig::new(10, 5, 1, 1000)?.with_hint_after_attempts(4);
/// assert_eq!(config.range(), 1..=1000);
/// assert!(!config.contains(0));
/// # Ok::<(), numguess_engine::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    max_attempts: u32,
    max_rounds: u32,
    range_low: i32,
    range_high: i32,
    hint_after_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            range_low: Self::DEFAULT_RANGE_LOW,
            range_high: Self::DEFAULT_RANGE_HIGH,
            hint_after_attempts: Self::DEFAULT_HINT_AFTER_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 7;
    pub const DEFAULT_MAX_ROUNDS: u32 = 3;
    pub const DEFAULT_RANGE_LOW: i32 = 1;
    pub const DEFAULT_RANGE_HIGH: i32 = 100;
    pub const DEFAULT_HINT_AFTER_ATTEMPTS: u32 = 3;

    /// Creates a configuration with the default hint threshold.
    pub fn new(
        max_attempts: u32,
        max_rounds: u32,
        range_low: i32,
        range_high: i32,
    ) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if range_low >= range_high {
            return Err(ConfigError::EmptyRange {
                low: range_low,
                high: range_high,
            });
        }
        Ok(Self {
            max_attempts,
            max_rounds,
            range_low,
            range_high,
            hint_after_attempts: Self::DEFAULT_HINT_AFTER_ATTEMPTS,
        })
    }

    /// Sets the attempt count at which a still-running round yields a hint.
    ///
    /// The threshold is independent of `max_attempts`; a threshold of zero or
    /// one at or above `max_attempts` never produces a hint.
    #[must_use]
    pub const fn with_hint_after_attempts(self, hint_after_attempts: u32) -> Self {
        Self {
            hint_after_attempts,
            ..self
        }
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub const fn range_low(&self) -> i32 {
        self.range_low
    }

    #[must_use]
    pub const fn range_high(&self) -> i32 {
        self.range_high
    }

    #[must_use]
    pub const fn hint_after_attempts(&self) -> u32 {
        self.hint_after_attempts
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<i32> {
        self.range_low..=self.range_high
    }

    /// Returns `true` if `value` is a valid guess.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.range_low <= value && value <= self.range_high
    }

    /// Number of distinct valid guesses.
    #[must_use]
    pub(crate) fn span(&self) -> i64 {
        i64::from(self.range_high) - i64::from(self.range_low) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts(), 7);
        assert_eq!(config.max_rounds(), 3);
        assert_eq!(config.range(), 1..=100);
        assert_eq!(config.hint_after_attempts(), 3);
        assert_eq!(config.span(), 100);
    }

    #[test]
    fn test_new_rejects_zero_attempts() {
        assert_eq!(
            GameConfig::new(0, 3, 1, 100),
            Err(ConfigError::ZeroAttempts)
        );
    }

    #[test]
    fn test_new_rejects_zero_rounds() {
        assert_eq!(GameConfig::new(7, 0, 1, 100), Err(ConfigError::ZeroRounds));
    }

    #[test]
    fn test_new_rejects_empty_range() {
        assert_eq!(
            GameConfig::new(7, 3, 5, 5),
            Err(ConfigError::EmptyRange { low: 5, high: 5 })
        );
        assert_eq!(
            GameConfig::new(7, 3, 10, 1),
            Err(ConfigError::EmptyRange { low: 10, high: 1 })
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let config = GameConfig::new(7, 3, -5, 5).unwrap();
        assert!(config.contains(-5));
        assert!(config.contains(5));
        assert!(!config.contains(-6));
        assert!(!config.contains(6));
    }

    #[test]
    fn test_span_does_not_overflow_on_full_range() {
        let config = GameConfig::new(1, 1, i32::MIN, i32::MAX).unwrap();
        assert_eq!(config.span(), 1_i64 << 32);
    }

    #[test]
    fn test_hint_threshold_is_independent_of_attempts() {
        let config = GameConfig::new(20, 3, 1, 100)
            .unwrap()
            .with_hint_after_attempts(3);
        assert_eq!(config.max_attempts(), 20);
        assert_eq!(config.hint_after_attempts(), 3);
    }
}
