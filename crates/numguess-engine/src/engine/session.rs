use rand::Rng as _;
use tracing::{debug, info};

use crate::{
    GameConfig, GameSeed, GuessError, GuessOutcome, ResultsLedger, RoundEngine, RoundState,
    SessionError, Summary,
};

/// A full play-through of `max_rounds` rounds.
///
/// The session owns the [`RoundEngine`], the [`ResultsLedger`] and the round
/// currently being played. Concluded rounds are recorded in the ledger before
/// [`submit_guess`](Self::submit_guess) returns, so the next round number is
/// always `ledger().len() + 1` and the session is complete exactly when the
/// ledger holds `max_rounds` results.
#[derive(Debug, Clone)]
pub struct GameSession {
    seed: GameSeed,
    engine: RoundEngine,
    ledger: ResultsLedger,
    round: Option<RoundState>,
}

impl GameSession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible targets.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: GameSeed) -> Self {
        Self {
            seed,
            engine: RoundEngine::with_seed(config, seed),
            ledger: ResultsLedger::new(),
            round: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    #[must_use]
    pub const fn seed(&self) -> GameSeed {
        self.seed
    }

    #[must_use]
    pub const fn ledger(&self) -> &ResultsLedger {
        &self.ledger
    }

    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        self.ledger.summary()
    }

    /// The round being played, or the last concluded one until the next
    /// round starts. `None` before the first round and after a restart.
    #[must_use]
    pub const fn current_round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Number of the round shown to the player: the current round if one
    /// exists, otherwise the one that would start next.
    #[must_use]
    pub fn current_round_number(&self) -> u32 {
        self.round
            .as_ref()
            .map_or_else(|| self.next_round_number(), RoundState::round_number)
    }

    #[must_use]
    pub fn is_round_active(&self) -> bool {
        self.round.as_ref().is_some_and(RoundState::is_active)
    }

    /// Returns `true` once every round of the session has a result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        usize::try_from(self.config().max_rounds()).is_ok_and(|max| self.ledger.len() >= max)
    }

    fn next_round_number(&self) -> u32 {
        u32::try_from(self.ledger.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    /// Starts the next round.
    ///
    /// Fails with [`SessionError::SessionComplete`] after the last round and
    /// with [`SessionError::RoundInProgress`] while the current round has not
    /// concluded.
    pub fn start_next_round(&mut self) -> Result<&RoundState, SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        if let Some(round) = self.round.as_ref().filter(|round| round.is_active()) {
            return Err(SessionError::RoundInProgress {
                round_number: round.round_number(),
            });
        }

        let round_number = self.next_round_number();
        let state = self.engine.start_round(round_number)?;
        debug!(round_number, "round started");
        Ok(self.round.insert(state))
    }

    /// Applies a guess to the current round.
    ///
    /// If the guess concludes the round, its result is already recorded in
    /// the ledger when this returns. Rejected input leaves the session
    /// unchanged.
    pub fn submit_guess(&mut self, guess_text: &str) -> Result<GuessOutcome, SessionError> {
        let Some(state) = self.round.as_mut().filter(|round| round.is_active()) else {
            return Err(GuessError::ProtocolMisuse.into());
        };

        let outcome = match self.engine.submit_guess(state, guess_text) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(round_number = state.round_number(), %err, "guess rejected");
                return Err(err.into());
            }
        };

        if let Some(result) = outcome.result() {
            self.ledger.record(result.clone())?;
            info!(
                round_number = result.round_number(),
                won = result.won(),
                attempts = result.attempts_used(),
                score = result.score_awarded(),
                total_score = self.ledger.total_score(),
                "round concluded"
            );
        }
        Ok(outcome)
    }

    /// Clears all results and the current round and draws a fresh seed.
    ///
    /// Afterwards [`seed`](Self::seed) reproduces the restarted session from
    /// round 1, like the seed of a new session.
    pub fn restart(&mut self) {
        let seed = rand::rng().random();
        self.seed = seed;
        self.engine = RoundEngine::with_seed(*self.engine.config(), seed);
        self.ledger.reset();
        self.round = None;
        info!(%seed, "session restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LedgerError, Rank, RoundResult, score};

    fn session() -> GameSession {
        GameSession::with_seed(GameConfig::default(), GameSeed::from_bytes([3; 16]))
    }

    fn target(session: &GameSession) -> i32 {
        session.current_round().unwrap().target()
    }

    fn wrong_guess(session: &GameSession) -> String {
        let guess = if target(session) == 1 { 2 } else { 1 };
        guess.to_string()
    }

    /// Plays the current round to a win on exactly `attempts` guesses.
    fn win_in(session: &mut GameSession, attempts: u32) -> RoundResult {
        for _ in 1..attempts {
            let guess = wrong_guess(session);
            assert!(session.submit_guess(&guess).unwrap().is_continue());
        }
        let guess = target(session).to_string();
        let GuessOutcome::Won(result) = session.submit_guess(&guess).unwrap() else {
            panic!("expected a win");
        };
        result
    }

    fn lose(session: &mut GameSession) -> RoundResult {
        loop {
            let guess = wrong_guess(session);
            if let GuessOutcome::LostExhausted(result) = session.submit_guess(&guess).unwrap() {
                return result;
            }
        }
    }

    #[test]
    fn test_full_session() {
        let mut session = session();

        session.start_next_round().unwrap();
        assert_eq!(session.current_round_number(), 1);
        let first = win_in(&mut session, 4);

        session.start_next_round().unwrap();
        assert_eq!(session.current_round_number(), 2);
        let second = win_in(&mut session, 5);

        session.start_next_round().unwrap();
        let third = lose(&mut session);

        assert_eq!(first.score_awarded(), 160);
        assert_eq!(second.score_awarded(), 140);
        assert_eq!(third.score_awarded(), 0);
        assert_eq!(third.attempts_used(), 7);

        let summary = session.summary();
        assert_eq!(summary.len(), 3);
        assert_eq!(
            summary.total_score(),
            u64::from(score(4, 7) + score(5, 7))
        );
        assert_eq!(summary.rank(), Rank::GuessingMaster);
        assert!(session.is_complete());
        assert_eq!(
            session.start_next_round().unwrap_err(),
            SessionError::SessionComplete
        );
    }

    #[test]
    fn test_round_numbers_follow_results() {
        let mut session = session();
        for expected in 1..=3 {
            let round = session.start_next_round().unwrap();
            assert_eq!(round.round_number(), expected);
            lose(&mut session);
            assert_eq!(session.ledger().len(), usize::try_from(expected).unwrap());
        }
        let numbers: Vec<_> = session
            .summary()
            .results()
            .map(RoundResult::round_number)
            .collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn test_cannot_start_while_round_active() {
        let mut session = session();
        session.start_next_round().unwrap();
        assert_eq!(
            session.start_next_round().unwrap_err(),
            SessionError::RoundInProgress { round_number: 1 }
        );
    }

    #[test]
    fn test_guess_without_round_is_protocol_misuse() {
        let mut session = session();
        assert_eq!(
            session.submit_guess("50").unwrap_err(),
            SessionError::Guess(GuessError::ProtocolMisuse)
        );

        session.start_next_round().unwrap();
        win_in(&mut session, 1);
        assert_eq!(
            session.submit_guess("50").unwrap_err(),
            SessionError::Guess(GuessError::ProtocolMisuse)
        );
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_rejected_input_leaves_session_unchanged() {
        let mut session = session();
        session.start_next_round().unwrap();
        let before = session.current_round().cloned();

        assert!(matches!(
            session.submit_guess("abc"),
            Err(SessionError::Guess(GuessError::InvalidInput { .. }))
        ));
        assert!(matches!(
            session.submit_guess("500"),
            Err(SessionError::Guess(GuessError::OutOfRange { .. }))
        ));
        assert_eq!(session.current_round().cloned(), before);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_concluded_round_remains_visible() {
        let mut session = session();
        session.start_next_round().unwrap();
        let result = lose(&mut session);

        let round = session.current_round().unwrap();
        assert!(!round.is_active());
        assert_eq!(round.target(), result.target());
        assert!(!session.is_round_active());
        assert_eq!(session.current_round_number(), 1);
    }

    #[test]
    fn test_restart_resets_results() {
        let mut session = session();
        session.start_next_round().unwrap();
        win_in(&mut session, 2);
        session.start_next_round().unwrap();

        session.restart();
        assert!(session.ledger().is_empty());
        assert_eq!(session.summary().total_score(), 0);
        assert!(session.current_round().is_none());
        assert_eq!(session.current_round_number(), 1);

        assert_eq!(session.start_next_round().unwrap().round_number(), 1);
    }

    #[test]
    fn test_restarted_session_is_replayable_from_its_seed() {
        let mut session = session();
        let first_seed = session.seed();
        session.start_next_round().unwrap();
        lose(&mut session);

        session.restart();
        assert_ne!(session.seed(), first_seed);
        let mut targets = vec![];
        while !session.is_complete() {
            targets.push(session.start_next_round().unwrap().target());
            lose(&mut session);
        }

        let mut replay = GameSession::with_seed(*session.config(), session.seed());
        let mut replayed = vec![];
        while !replay.is_complete() {
            replayed.push(replay.start_next_round().unwrap().target());
            lose(&mut replay);
        }
        assert_eq!(targets, replayed);
    }

    #[test]
    fn test_same_seed_replays_same_targets() {
        let seed = GameSeed::from_bytes([0x42; 16]);
        let mut a = GameSession::with_seed(GameConfig::default(), seed);
        let mut b = GameSession::with_seed(GameConfig::default(), seed);
        for _ in 0..3 {
            let ta = a.start_next_round().unwrap().target();
            let tb = b.start_next_round().unwrap().target();
            assert_eq!(ta, tb);
            lose(&mut a);
            lose(&mut b);
        }
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_ledger_error_converts() {
        let err: SessionError = LedgerError::DuplicateRound { round_number: 2 }.into();
        assert!(err.is_ledger());
        assert_eq!(err.to_string(), "a result for round 2 is already recorded");
    }
}
