use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;

use crate::{
    command::game_arg::GameArg,
    schema::report::{PlayerInfo, SessionReport},
    tui::{Runtime, ScreenStack},
};

use self::screens::GameScreen;

mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    game: GameArg,
    /// Save the session report to a file when the game ends
    #[clap(long)]
    save_results: bool,
    /// Directory to save session reports
    #[clap(long, default_value = "./data/results/")]
    results_dir: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            game: GameArg::default(),
            save_results: false,
            results_dir: PathBuf::from("./data/results/"),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        game,
        save_results,
        results_dir,
    } = arg;

    let mut session = game.new_session()?;
    info!(seed = %session.seed(), "starting interactive session");
    session
        .start_next_round()
        .context("failed to start the first round")?;

    let mut failure = None;
    {
        let screen = GameScreen::new(&mut session, &mut failure);
        let mut stack = ScreenStack::new(Box::new(screen));
        Runtime::new()
            .run(&mut stack)
            .context("terminal I/O failed")?;
    }
    if let Some(err) = failure {
        return Err(anyhow::Error::new(err).context("game session aborted"));
    }

    if *save_results {
        let report = SessionReport::new(PlayerInfo::Manual, &session);
        let path = report.save_to_dir(results_dir)?;
        eprintln!("Session report saved to {}", path.display());
    }

    Ok(())
}
