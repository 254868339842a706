use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use numguess_engine::{GameConfig, GameSeed, GameSession, Summary};
use serde::Serialize;
use tracing::info;

use crate::util;

/// Results of a played session with the settings needed to replay it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport<'a> {
    /// Time the report was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Who played the session
    pub player: PlayerInfo,
    /// Seed the targets were drawn from
    pub seed: GameSeed,
    /// Game configuration of the session
    pub config: GameConfig,
    /// Round results, total score and rank
    pub summary: Summary<'a>,
}

/// Information about the player type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerInfo {
    /// Manual play in the terminal
    Manual,
    /// Headless bisection player
    Bisect,
}

impl PlayerInfo {
    fn file_prefix(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Bisect => "bisect",
        }
    }
}

impl<'a> SessionReport<'a> {
    pub fn new(player: PlayerInfo, session: &'a GameSession) -> Self {
        Self {
            recorded_at: Utc::now(),
            player,
            seed: session.seed(),
            config: *session.config(),
            summary: session.summary(),
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.json",
            self.player.file_prefix(),
            self.recorded_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Writes the report into `dir`, creating it if needed, and returns the
    /// path of the written file.
    pub fn save_to_dir(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let path = dir.join(self.file_name());
        util::write_json_file(&path, self)?;
        info!(path = %path.display(), "session report saved");
        Ok(path)
    }
}
