use anyhow::Context as _;
use numguess_engine::{GameConfig, GameSeed, GameSession};

/// Game configuration options shared by all modes.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Number of guesses allowed per round
    #[clap(long, default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
    /// Number of rounds in a session
    #[clap(long, default_value_t = GameConfig::DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,
    /// Smallest number that can be picked
    #[clap(long, default_value_t = GameConfig::DEFAULT_RANGE_LOW, allow_negative_numbers = true)]
    min: i32,
    /// Largest number that can be picked
    #[clap(long, default_value_t = GameConfig::DEFAULT_RANGE_HIGH, allow_negative_numbers = true)]
    max: i32,
    /// Attempt after which a parity and range hint is shown (0 disables hints)
    #[clap(long, default_value_t = GameConfig::DEFAULT_HINT_AFTER_ATTEMPTS)]
    hint_after: u32,
    /// Seed for the hidden numbers as 32 hex digits (random when omitted)
    #[clap(long)]
    seed: Option<GameSeed>,
}

impl Default for GameArg {
    fn default() -> Self {
        Self {
            max_attempts: GameConfig::DEFAULT_MAX_ATTEMPTS,
            max_rounds: GameConfig::DEFAULT_MAX_ROUNDS,
            min: GameConfig::DEFAULT_RANGE_LOW,
            max: GameConfig::DEFAULT_RANGE_HIGH,
            hint_after: GameConfig::DEFAULT_HINT_AFTER_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameArg {
    pub(crate) fn config(&self) -> anyhow::Result<GameConfig> {
        let config = GameConfig::new(self.max_attempts, self.max_rounds, self.min, self.max)
            .context("invalid game configuration")?;
        Ok(config.with_hint_after_attempts(self.hint_after))
    }

    pub(crate) fn new_session(&self) -> anyhow::Result<GameSession> {
        let config = self.config()?;
        let session = match self.seed {
            Some(seed) => GameSession::with_seed(config, seed),
            None => GameSession::new(config),
        };
        Ok(session)
    }
}
