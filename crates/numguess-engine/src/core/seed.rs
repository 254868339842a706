use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic target generation.
///
/// A 128-bit value that initializes the random number generator of a
/// [`RoundEngine`](crate::RoundEngine). The same seed always draws the same
/// sequence of targets, which makes sessions reproducible from a report.
///
/// Seeds are written as 32 hexadecimal characters, both by [`fmt::Display`]
/// and by the serde representation.
///
/// # Example
///
/// ```
/// use numguess_engine::GameSeed;
/// use rand::Rng as _;
///
/// let seed: GameSeed = rand::rng().random();
/// let parsed: GameSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: {reason}")]
pub struct ParseSeedError {
    input: String,
    reason: String,
}

impl GameSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |reason: String| ParseSeedError {
            input: s.to_owned(),
            reason,
        };
        if s.len() != 32 {
            return Err(error(format!("expected 32 characters, got {}", s.len())));
        }
        let num = u128::from_str_radix(s, 16).map_err(|e| error(e.to_string()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `GameSeed` values with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENTIAL: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];

    #[test]
    fn test_display_is_big_endian_hex() {
        let seed = GameSeed::from_bytes(SEQUENTIAL);
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        assert_eq!(
            GameSeed::from_bytes([0; 16]).to_string(),
            "00000000000000000000000000000000"
        );
    }

    #[test]
    fn test_from_str_accepts_uppercase() {
        let seed: GameSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_bytes(), SEQUENTIAL);
    }

    #[test]
    fn test_from_str_rejects_wrong_length() {
        let err = "0123".parse::<GameSeed>().unwrap_err();
        assert!(err.to_string().contains("expected 32 characters"));
        assert!("".parse::<GameSeed>().is_err());
        assert!(
            "0123456789abcdef0123456789abcdef0"
                .parse::<GameSeed>()
                .is_err()
        );
    }

    #[test]
    fn test_from_str_rejects_non_hex() {
        let err = "ghijklmnopqrstuvwxyzghijklmnopqr"
            .parse::<GameSeed>()
            .unwrap_err();
        assert!(err.to_string().contains("invalid hex seed"));
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let seed = GameSeed::from_bytes(SEQUENTIAL);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, "\"0123456789abcdeffedcba9876543210\"");

        let back: GameSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }

    #[test]
    fn test_deserialize_reports_invalid_hex() {
        let result: Result<GameSeed, _> = serde_json::from_str("\"xyz\"");
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("invalid hex seed"));
    }
}
