use std::{fmt, slice};

use serde::Serialize;

use crate::LedgerError;

/// Final outcome of one round.
///
/// Created once when a round concludes and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    round_number: u32,
    attempts_used: u32,
    score_awarded: u32,
    won: bool,
    target: i32,
}

impl RoundResult {
    #[must_use]
    pub const fn new(
        round_number: u32,
        attempts_used: u32,
        score_awarded: u32,
        won: bool,
        target: i32,
    ) -> Self {
        Self {
            round_number,
            attempts_used,
            score_awarded,
            won,
            target,
        }
    }

    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Points earned; always 0 for a lost round.
    #[must_use]
    pub const fn score_awarded(&self) -> u32 {
        self.score_awarded
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    /// The number that was to be guessed.
    #[must_use]
    pub const fn target(&self) -> i32 {
        self.target
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round {}: {} - {} attempts - {} points (Number: {})",
            self.round_number,
            if self.won { "WON" } else { "LOST" },
            self.attempts_used,
            self.score_awarded,
            self.target,
        )
    }
}

/// Label derived from the cumulative score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, derive_more::Display)]
pub enum Rank {
    Beginner,
    GoodPlayer,
    ExpertGuesser,
    GuessingMaster,
}

impl Rank {
    /// Maps a cumulative score to a rank, checking the highest threshold first.
    #[must_use]
    pub const fn from_score(total_score: u64) -> Self {
        match total_score {
            300.. => Self::GuessingMaster,
            200.. => Self::ExpertGuesser,
            100.. => Self::GoodPlayer,
            _ => Self::Beginner,
        }
    }
}

/// Shorthand for [`Rank::from_score`].
#[must_use]
pub const fn rank(total_score: u64) -> Rank {
    Rank::from_score(total_score)
}

/// Append-only record of concluded rounds.
///
/// The cumulative score is maintained alongside the results and always equals
/// the sum of their awarded scores.
///
/// # Example
///
/// ```
/// use numguess_engine::{Rank, ResultsLedger, RoundResult};
///
/// let mut ledger = ResultsLedger::new();
/// ledger.record(RoundResult::new(1, 4, 160, true, 42))?;
/// ledger.record(RoundResult::new(2, 7, 0, false, 13))?;
///
/// let summary = ledger.summary();
/// assert_eq!(summary.total_score(), 160);
/// assert_eq!(summary.rank(), Rank::GoodPlayer);
/// assert_eq!(summary.results().count(), 2);
/// # Ok::<(), numguess_engine::LedgerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsLedger {
    results: Vec<RoundResult>,
    total_score: u64,
}

impl ResultsLedger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
            total_score: 0,
        }
    }

    /// Appends a concluded round.
    ///
    /// Fails with [`LedgerError::DuplicateRound`] if a result for the same
    /// round number is already present; the ledger is left unchanged.
    pub fn record(&mut self, result: RoundResult) -> Result<(), LedgerError> {
        if self
            .results
            .iter()
            .any(|r| r.round_number == result.round_number)
        {
            return Err(LedgerError::DuplicateRound {
                round_number: result.round_number,
            });
        }
        self.total_score += u64::from(result.score_awarded);
        self.results.push(result);
        Ok(())
    }

    /// Results in completion order.
    #[must_use]
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    #[must_use]
    pub const fn total_score(&self) -> u64 {
        self.total_score
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        Rank::from_score(self.total_score)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Borrowed view of the ledger as it is now.
    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            results: &self.results,
            total_score: self.total_score,
            rank: self.rank(),
        }
    }

    pub fn reset(&mut self) {
        self.results.clear();
        self.total_score = 0;
    }
}

/// Snapshot of a [`ResultsLedger`] for rendering.
///
/// `Summary` is `Copy`; each call to [`results`](Self::results) or
/// `into_iter` starts again from the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary<'a> {
    results: &'a [RoundResult],
    total_score: u64,
    rank: Rank,
}

impl<'a> Summary<'a> {
    pub fn results(&self) -> slice::Iter<'a, RoundResult> {
        self.results.iter()
    }

    #[must_use]
    pub const fn total_score(&self) -> u64 {
        self.total_score
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for Summary<'a> {
    type Item = &'a RoundResult;
    type IntoIter = slice::Iter<'a, RoundResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
