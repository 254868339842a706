use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::util;

use self::{auto_play::AutoPlayArg, play::PlayArg};

mod auto_play;
mod game_arg;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write log output to this file
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Let a bisection player play a session and print the results
    AutoPlay(#[clap(flatten)] AutoPlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Play(PlayArg::default()));

    // The TUI owns the terminal, so it only logs to a file.
    util::init_tracing(args.log_file.as_deref(), mode.is_auto_play())?;

    match mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::AutoPlay(arg) => auto_play::run(&arg)?,
    }
    Ok(())
}

impl Mode {
    fn is_auto_play(&self) -> bool {
        matches!(self, Self::AutoPlay(_))
    }
}
