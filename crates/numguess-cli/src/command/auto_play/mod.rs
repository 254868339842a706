use std::path::PathBuf;

use anyhow::Context as _;
use numguess_engine::{GameSession, GuessOutcome, RoundResult};
use tracing::{debug, info};

use crate::{
    command::game_arg::GameArg,
    schema::report::{PlayerInfo, SessionReport},
    util,
    view::text,
};

use self::player::BisectPlayer;

mod player;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    game: GameArg,
    /// Also write the JSON session report to this file
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg { game, output } = arg;

    let mut session = game.new_session()?;
    info!(seed = %session.seed(), "starting auto-play session");
    play_session(&mut session)?;

    println!("Seed: {}", session.seed());
    for line in text::results_log(session.summary()) {
        println!("{line}");
    }

    if let Some(path) = output {
        let report = SessionReport::new(PlayerInfo::Bisect, &session);
        util::write_json_file(path, &report)?;
        eprintln!("Session report saved to {}", path.display());
    }
    Ok(())
}

fn play_session(session: &mut GameSession) -> anyhow::Result<()> {
    while !session.is_complete() {
        let round_number = session
            .start_next_round()
            .context("failed to start round")?
            .round_number();
        let result = play_round(session)
            .with_context(|| format!("failed to play round {round_number}"))?;
        debug!(%result, "round played");
    }
    Ok(())
}

fn play_round(session: &mut GameSession) -> anyhow::Result<RoundResult> {
    let mut player = BisectPlayer::new(session.config());
    loop {
        let guess = player.next_guess();
        match session.submit_guess(&guess.to_string())? {
            GuessOutcome::Continue { direction, hint } => {
                debug!(guess, ?direction, hinted = hint.is_some(), "wrong guess");
                player.observe(guess, direction, hint.as_ref());
            }
            GuessOutcome::Won(result) | GuessOutcome::LostExhausted(result) => return Ok(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use numguess_engine::{GameConfig, GameSeed, Rank};

    use super::*;

    #[test]
    fn test_play_session_fills_ledger() {
        let mut session =
            GameSession::with_seed(GameConfig::default(), GameSeed::from_bytes([5; 16]));
        play_session(&mut session).unwrap();

        let summary = session.summary();
        assert_eq!(summary.len(), 3);
        assert!(summary.results().all(RoundResult::won));
        assert!(summary.total_score() >= 300);
        assert_eq!(summary.rank(), Rank::GuessingMaster);
    }

    #[test]
    fn test_run_writes_report_file() {
        let dir = std::env::temp_dir().join(format!("numguess-auto-play-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.json");
        let arg = AutoPlayArg {
            game: GameArg::default(),
            output: Some(path.clone()),
        };
        run(&arg).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report["player"], "Bisect");
        assert_eq!(report["summary"]["results"].as_array().unwrap().len(), 3);
        assert!(report["seed"].as_str().unwrap().parse::<GameSeed>().is_ok());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
