//! Rules engine for a round-based number-guessing game.
//!
//! - [`core`] holds the leaf types: [`GameConfig`], the [`score`] function,
//!   hint payloads and the [`GameSeed`] used to make target draws reproducible.
//! - [`engine`] holds the stateful parts: [`RoundEngine`] classifies guesses
//!   within one round, [`ResultsLedger`] accumulates concluded rounds, and
//!   [`GameSession`] ties both together for a full play-through.
//!
//! # Example
//!
//! ```
//! use numguess_engine::{Direction, GameConfig, GuessOutcome, RoundEngine};
//!
//! let engine = RoundEngine::new(GameConfig::default());
//! let mut round = engine.start_round_with_target(1, 42).unwrap();
//!
//! let outcome = engine.submit_guess(&mut round, "10").unwrap();
//! assert_eq!(outcome.direction(), Some(Direction::Higher));
//!
//! let GuessOutcome::Won(result) = engine.submit_guess(&mut round, "42").unwrap() else {
//!     panic!("expected a win");
//! };
//! assert_eq!(result.attempts_used(), 2);
//! assert_eq!(result.score_awarded(), 200);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("maximum attempts must be greater than zero")]
    ZeroAttempts,
    #[display("maximum rounds must be greater than zero")]
    ZeroRounds,
    #[display("guess range {low}..={high} must have low < high")]
    EmptyRange { low: i32, high: i32 },
}

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GuessError {
    #[display("not a number: {input:?}")]
    InvalidInput { input: String },
    #[display("guess {guess} is outside {low}..={high}")]
    OutOfRange { guess: i32, low: i32, high: i32 },
    #[display("guess submitted without an active round")]
    ProtocolMisuse,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StartRoundError {
    #[display("round {round_number} is outside 1..={max_rounds}")]
    RoundNumber { round_number: u32, max_rounds: u32 },
    #[display("target {target} is outside {low}..={high}")]
    TargetOutOfRange { target: i32, low: i32, high: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LedgerError {
    #[display("a result for round {round_number} is already recorded")]
    DuplicateRound { round_number: u32 },
}

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SessionError {
    #[display("{_0}")]
    #[from]
    Guess(GuessError),
    #[display("{_0}")]
    #[from]
    StartRound(StartRoundError),
    #[display("{_0}")]
    #[from]
    Ledger(LedgerError),
    #[display("round {round_number} is still in progress")]
    RoundInProgress { round_number: u32 },
    #[display("all rounds of this session are complete")]
    SessionComplete,
}
