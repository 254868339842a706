//! Player-facing wording shared by the TUI and the headless auto-player.

use numguess_engine::{Direction, GuessError, Hint, Parity, Rank, Summary};

pub fn rank_line(rank: Rank) -> &'static str {
    match rank {
        Rank::GuessingMaster => "Rank: GUESSING MASTER!",
        Rank::ExpertGuesser => "Rank: EXPERT GUESSER!",
        Rank::GoodPlayer => "Rank: GOOD PLAYER!",
        Rank::Beginner => "Rank: BEGINNER - Keep practicing!",
    }
}

pub fn direction_line(guess: i32, direction: Direction) -> String {
    let word = match direction {
        Direction::Higher => "HIGHER",
        Direction::Lower => "LOWER",
    };
    format!("The number is {word} than {guess}")
}

pub fn hint_line(hint: &Hint) -> String {
    let parity = match hint.parity() {
        Parity::Even => "EVEN",
        Parity::Odd => "ODD",
    };
    format!("The number is {parity}. It's between {}", hint.band())
}

/// Message for input the player can correct. `None` for caller errors.
pub fn guess_error_message(err: &GuessError) -> Option<String> {
    match err {
        GuessError::InvalidInput { input } if input.is_empty() => {
            Some("Please enter a number!".to_owned())
        }
        GuessError::InvalidInput { .. } => Some("Please enter a valid number!".to_owned()),
        GuessError::OutOfRange { low, high, .. } => {
            Some(format!("Please enter a number between {low} and {high}!"))
        }
        GuessError::ProtocolMisuse => None,
    }
}

/// The running results log, one entry per line.
pub fn results_log(summary: Summary<'_>) -> Vec<String> {
    let mut lines = vec!["=== GAME RESULTS ===".to_owned(), String::new()];
    if summary.is_empty() {
        lines.push("No rounds completed yet.".to_owned());
        return lines;
    }
    lines.extend(summary.results().map(ToString::to_string));
    lines.push(String::new());
    lines.push(format!("Total Score: {} points", summary.total_score()));
    lines.push(rank_line(summary.rank()).to_owned());
    lines
}
