//! Round lifecycle, result bookkeeping and session orchestration.
//!
//! - [`RoundEngine`] - Draws targets and classifies guesses for one round
//! - [`RoundState`] - Mutable state of the round being played
//! - [`ResultsLedger`] - Concluded rounds, cumulative score and [`Rank`]
//! - [`GameSession`] - Drives rounds in order and records their results
//!
//! # Round Flow
//!
//! ```text
//! NotStarted --start_round--> Active --submit_guess--> Active
//!                               |
//!                               +--> Won            (guess == target)
//!                               +--> LostExhausted  (attempt budget spent)
//! ```
//!
//! Rejected input (`InvalidInput`, `OutOfRange`) leaves the round untouched.
//! A concluded round produces exactly one [`RoundResult`].
//!
//! # Example
//!
//! ```
//! use numguess_engine::{GameConfig, GameSession, GuessOutcome};
//!
//! let mut session = GameSession::new(GameConfig::default());
//! session.start_next_round().unwrap();
//!
//! // Walk the range from the bottom until the round concludes.
//! let mut guess = 1;
//! let result = loop {
//!     match session.submit_guess(&guess.to_string()).unwrap() {
//!         GuessOutcome::Continue { .. } => guess += 1,
//!         GuessOutcome::Won(result) | GuessOutcome::LostExhausted(result) => break result,
//!     }
//! };
//!
//! assert_eq!(result.round_number(), 1);
//! assert_eq!(session.ledger().len(), 1);
//! ```

pub use self::{ledger::*, round::*, session::*};

mod ledger;
mod round;
mod session;
