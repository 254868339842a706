use std::fmt;

use serde::Serialize;

use crate::GameConfig;

/// Where the target lies relative to a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum Direction {
    /// The target is greater than the guess.
    Higher,
    /// The target is less than the guess.
    Lower,
}

impl Direction {
    /// Returns `None` when the guess hits the target.
    #[must_use]
    pub fn of(guess: i32, target: i32) -> Option<Self> {
        match guess.cmp(&target) {
            std::cmp::Ordering::Less => Some(Self::Higher),
            std::cmp::Ordering::Greater => Some(Self::Lower),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub fn of(value: i32) -> Self {
        if value.rem_euclid(2) == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// One of four equal-width slices of the guess range.
///
/// Band `i` holds every value `v` with `(v - low) * 4 / span == i`, so the
/// upper edge of each band is inclusive. For `1..=100` the bands are `1-25`,
/// `26-50`, `51-75` and `76-100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    index: u8,
    low: i32,
    high: i32,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl Band {
    pub const COUNT: u8 = 4;

    /// Returns the band containing `value`.
    ///
    /// Values outside the configured range are clamped to the nearest band.
    #[must_use]
    pub fn containing(value: i32, config: &GameConfig) -> Self {
        let offset = (i64::from(value) - i64::from(config.range_low())).clamp(0, config.span() - 1);
        let index = offset * i64::from(Self::COUNT) / config.span();
        Self::nth(narrow_index(index), config)
    }

    /// Returns band `index` (0-based) of the configured range.
    #[must_use]
    pub fn nth(index: u8, config: &GameConfig) -> Self {
        let index = index.min(Self::COUNT - 1);
        let low = band_edge(index, config);
        let high = band_edge(index + 1, config) - 1;
        Self {
            index,
            low: narrow_value(low),
            high: narrow_value(high),
        }
    }

    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    #[must_use]
    pub const fn low(&self) -> i32 {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> i32 {
        self.high
    }

    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.low <= value && value <= self.high
    }
}

/// First value of band `index`; `index == COUNT` yields one past the range.
fn band_edge(index: u8, config: &GameConfig) -> i64 {
    let count = i64::from(Band::COUNT);
    let scaled = i64::from(index) * config.span();
    i64::from(config.range_low()) + (scaled + count - 1) / count
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn narrow_index(index: i64) -> u8 {
    index.clamp(0, i64::from(Band::COUNT) - 1) as u8
}

#[expect(clippy::cast_possible_truncation)]
fn narrow_value(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Extra information revealed once a round reaches the hint threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hint {
    parity: Parity,
    band: Band,
}

impl Hint {
    #[must_use]
    pub fn for_target(target: i32, config: &GameConfig) -> Self {
        Self {
            parity: Parity::of(target),
            band: Band::containing(target, config),
        }
    }

    #[must_use]
    pub const fn parity(&self) -> Parity {
        self.parity
    }

    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }
}
