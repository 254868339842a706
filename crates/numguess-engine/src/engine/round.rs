use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    Direction, GameConfig, GameSeed, GuessError, Hint, RoundResult, StartRoundError, score,
};

/// Lifecycle position of a started round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RoundStatus {
    Active,
    Won,
    LostExhausted,
}

/// State of a single round.
///
/// Created by [`RoundEngine::start_round`] and mutated only through
/// [`RoundEngine::submit_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    round_number: u32,
    target: i32,
    attempts_used: u32,
    guesses: Vec<i32>,
    status: RoundStatus,
}

impl RoundState {
    fn new(round_number: u32, target: i32) -> Self {
        Self {
            round_number,
            target,
            attempts_used: 0,
            guesses: Vec::new(),
            status: RoundStatus::Active,
        }
    }

    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The hidden number. Presentation code should only reveal it once the
    /// round has concluded.
    #[must_use]
    pub const fn target(&self) -> i32 {
        self.target
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Accepted guesses in submission order.
    #[must_use]
    pub fn guesses(&self) -> &[i32] {
        &self.guesses
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Classification of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GuessOutcome {
    /// Wrong guess with attempts to spare. `hint` is set only on the attempt
    /// matching [`GameConfig::hint_after_attempts`].
    Continue {
        direction: Direction,
        hint: Option<Hint>,
    },
    /// The guess hit the target.
    Won(RoundResult),
    /// Wrong guess on the last allowed attempt. The result reveals the target.
    LostExhausted(RoundResult),
}

impl GuessOutcome {
    /// The result of the concluded round, if this guess concluded it.
    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        match self {
            Self::Continue { .. } => None,
            Self::Won(result) | Self::LostExhausted(result) => Some(result),
        }
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Continue { direction, .. } => Some(*direction),
            Self::Won(_) | Self::LostExhausted(_) => None,
        }
    }

    #[must_use]
    pub fn hint(&self) -> Option<&Hint> {
        match self {
            Self::Continue { hint, .. } => hint.as_ref(),
            Self::Won(_) | Self::LostExhausted(_) => None,
        }
    }
}

/// Starts rounds and classifies guesses according to a [`GameConfig`].
///
/// Targets are drawn uniformly from the configured range by a PCG32 generator
/// seeded with a [`GameSeed`]; two engines built from the same seed draw the
/// same targets in the same order.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    config: GameConfig,
    rng: Pcg32,
}

impl RoundEngine {
    /// Creates an engine with a random seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(config: GameConfig, seed: GameSeed) -> Self {
        Self {
            config,
            rng: Pcg32::from_seed(seed.to_bytes()),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts round `round_number` with a freshly drawn target.
    pub fn start_round(&mut self, round_number: u32) -> Result<RoundState, StartRoundError> {
        self.check_round_number(round_number)?;
        let target = self.rng.random_range(self.config.range());
        Ok(RoundState::new(round_number, target))
    }

    /// Starts round `round_number` with a known target, e.g. to replay a
    /// recorded round.
    pub fn start_round_with_target(
        &self,
        round_number: u32,
        target: i32,
    ) -> Result<RoundState, StartRoundError> {
        self.check_round_number(round_number)?;
        if !self.config.contains(target) {
            return Err(StartRoundError::TargetOutOfRange {
                target,
                low: self.config.range_low(),
                high: self.config.range_high(),
            });
        }
        Ok(RoundState::new(round_number, target))
    }

    fn check_round_number(&self, round_number: u32) -> Result<(), StartRoundError> {
        if round_number == 0 || round_number > self.config.max_rounds() {
            return Err(StartRoundError::RoundNumber {
                round_number,
                max_rounds: self.config.max_rounds(),
            });
        }
        Ok(())
    }

    /// Parses `guess_text` and applies it to `state`.
    ///
    /// Input that is not an integer or lies outside the range is rejected
    /// without consuming an attempt. Otherwise the attempt counter advances
    /// and the guess is classified as a win, a loss by exhaustion, or a
    /// higher/lower hint for the next attempt.
    pub fn submit_guess(
        &self,
        state: &mut RoundState,
        guess_text: &str,
    ) -> Result<GuessOutcome, GuessError> {
        if !state.is_active() {
            return Err(GuessError::ProtocolMisuse);
        }

        let input = guess_text.trim();
        let guess: i32 = input.parse().map_err(|_| GuessError::InvalidInput {
            input: input.to_owned(),
        })?;
        if !self.config.contains(guess) {
            return Err(GuessError::OutOfRange {
                guess,
                low: self.config.range_low(),
                high: self.config.range_high(),
            });
        }

        state.attempts_used += 1;
        state.guesses.push(guess);

        let Some(direction) = Direction::of(guess, state.target) else {
            state.status = RoundStatus::Won;
            let points = score(state.attempts_used, self.config.max_attempts());
            return Ok(GuessOutcome::Won(RoundResult::new(
                state.round_number,
                state.attempts_used,
                points,
                true,
                state.target,
            )));
        };

        if state.attempts_used >= self.config.max_attempts() {
            state.status = RoundStatus::LostExhausted;
            return Ok(GuessOutcome::LostExhausted(RoundResult::new(
                state.round_number,
                state.attempts_used,
                0,
                false,
                state.target,
            )));
        }

        let hint = (state.attempts_used == self.config.hint_after_attempts())
            .then(|| Hint::for_target(state.target, &self.config));
        Ok(GuessOutcome::Continue { direction, hint })
    }
}
