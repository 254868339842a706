use std::mem;

use crossterm::event::{Event, KeyCode};
use numguess_engine::{Direction, GameSession, GuessOutcome, RoundResult, SessionError};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::Block as BlockWidget,
};
use tracing::error;

use super::DialogScreen;
use crate::{
    tui::{Screen, ScreenTransition},
    view::{
        text,
        widgets::{
            GuessInputDisplay, KeyHelp, KeyHelpDisplay, ResultsLogDisplay, RoundStatusDisplay,
            style,
        },
    },
};

/// Longest input accepted, enough for any `i32` with sign.
const MAX_INPUT_LEN: usize = 11;

const PLAYING_KEYS: &[KeyHelp] = &[
    (&["0-9"], "Type"),
    (&["Enter"], "Guess"),
    (&["r"], "Restart"),
    (&["q", "Esc"], "Quit"),
];
const ROUND_OVER_KEYS: &[KeyHelp] = &[
    (&["Enter", "n"], "Next Round"),
    (&["r"], "Restart"),
    (&["q", "Esc"], "Quit"),
];
const GAME_OVER_KEYS: &[KeyHelp] = &[(&["r"], "Restart"), (&["q", "Esc"], "Quit")];

/// Last thing that happened in the current round, shown under the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    Intro,
    Direction { guess: i32, direction: Direction },
    Won { target: i32 },
    Lost { target: i32 },
}

/// The main play screen.
///
/// Engine errors other than rejected input end the program: they are stored
/// in `failure` and the screen requests exit.
#[derive(Debug)]
pub struct GameScreen<'a> {
    session: &'a mut GameSession,
    failure: &'a mut Option<SessionError>,
    input: String,
    feedback: Feedback,
}

impl<'a> GameScreen<'a> {
    pub fn new(session: &'a mut GameSession, failure: &'a mut Option<SessionError>) -> Self {
        Self {
            session,
            failure,
            input: String::new(),
            feedback: Feedback::Intro,
        }
    }

    fn can_start_next_round(&self) -> bool {
        !self.session.is_round_active() && !self.session.is_complete()
    }

    fn fail(&mut self, err: SessionError) -> ScreenTransition {
        error!(%err, "unexpected session error");
        *self.failure = Some(err);
        ScreenTransition::Exit
    }

    fn start_next_round(&mut self) -> ScreenTransition {
        match self.session.start_next_round() {
            Ok(_) => {
                self.input.clear();
                self.feedback = Feedback::Intro;
                ScreenTransition::Stay
            }
            Err(err) => self.fail(err),
        }
    }

    fn restart(&mut self) -> ScreenTransition {
        self.session.restart();
        self.start_next_round()
    }

    fn submit(&mut self) -> ScreenTransition {
        let input = mem::take(&mut self.input);
        match self.session.submit_guess(&input) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(SessionError::Guess(err)) => match text::guess_error_message(&err) {
                Some(message) => ScreenTransition::Push(Box::new(DialogScreen::error(message))),
                None => self.fail(err.into()),
            },
            Err(err) => self.fail(err),
        }
    }

    fn apply_outcome(&mut self, outcome: GuessOutcome) -> ScreenTransition {
        match outcome {
            GuessOutcome::Continue { direction, hint } => {
                let guess = self
                    .session
                    .current_round()
                    .and_then(|round| round.guesses().last().copied())
                    .unwrap_or_default();
                self.feedback = Feedback::Direction { guess, direction };
                match hint {
                    Some(hint) => ScreenTransition::Push(Box::new(
                        DialogScreen::new("Hint", vec![text::hint_line(&hint)])
                            .style(style::WARNING),
                    )),
                    None => ScreenTransition::Stay,
                }
            }
            GuessOutcome::Won(result) => {
                self.feedback = Feedback::Won {
                    target: result.target(),
                };
                ScreenTransition::Push(Box::new(self.won_dialog(&result)))
            }
            GuessOutcome::LostExhausted(result) => {
                self.feedback = Feedback::Lost {
                    target: result.target(),
                };
                ScreenTransition::Push(Box::new(self.lost_dialog(&result)))
            }
        }
    }

    fn won_dialog(&self, result: &RoundResult) -> DialogScreen {
        let total_score = self.session.summary().total_score();
        let dialog = if self.session.is_complete() {
            DialogScreen::new(
                "Game Complete!",
                vec![
                    "YOU WON THE GAME!".to_owned(),
                    format!("Final Score: {total_score} points"),
                    String::new(),
                    "Press 'r' to play again!".to_owned(),
                ],
            )
        } else {
            DialogScreen::new(
                "Congratulations!",
                vec![
                    format!("You won Round {}!", result.round_number()),
                    format!("Attempts: {}", result.attempts_used()),
                    format!("Round Score: {} points", result.score_awarded()),
                    format!("Total Score: {total_score} points"),
                    String::new(),
                    "Press 'n' for the next round!".to_owned(),
                ],
            )
        };
        dialog.style(style::SUCCESS)
    }

    fn lost_dialog(&self, result: &RoundResult) -> DialogScreen {
        let dialog = if self.session.is_complete() {
            DialogScreen::new(
                "Game Over",
                vec![
                    "You've completed all rounds!".to_owned(),
                    format!(
                        "Final Score: {} points",
                        self.session.summary().total_score()
                    ),
                    String::new(),
                    "Press 'r' to play again!".to_owned(),
                ],
            )
        } else {
            DialogScreen::new(
                "Round Over",
                vec![
                    "You ran out of attempts!".to_owned(),
                    format!("The number was: {}", result.target()),
                    String::new(),
                    "Press 'n' for the next round!".to_owned(),
                ],
            )
        };
        dialog.style(style::FAILURE)
    }

    fn feedback_line(&self) -> Line<'static> {
        match self.feedback {
            Feedback::Intro => {
                let config = self.session.config();
                Line::styled(
                    format!(
                        "I'm thinking of a number between {} and {}",
                        config.range_low(),
                        config.range_high()
                    ),
                    style::INFO,
                )
            }
            Feedback::Direction { guess, direction } => {
                Line::styled(text::direction_line(guess, direction), style::WARNING)
            }
            Feedback::Won { target } => {
                Line::styled(format!("CORRECT! The number was {target}"), style::SUCCESS)
            }
            Feedback::Lost { target } => {
                Line::styled(format!("Game Over! The number was {target}"), style::FAILURE)
            }
        }
    }

    fn key_help(&self) -> &'static [KeyHelp<'static>] {
        if self.session.is_round_active() {
            PLAYING_KEYS
        } else if self.can_start_next_round() {
            ROUND_OVER_KEYS
        } else {
            GAME_OVER_KEYS
        }
    }
}

impl Screen for GameScreen<'_> {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_press_event() else {
            return ScreenTransition::Stay;
        };
        let active = self.session.is_round_active();
        match key.code {
            KeyCode::Char(c @ ('0'..='9' | '-')) if active => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace if active => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter if active => self.submit(),
            KeyCode::Enter | KeyCode::Char('n') if self.can_start_next_round() => {
                self.start_next_round()
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Exit,
            _ => ScreenTransition::Stay,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let config = self.session.config();
        let round_status = RoundStatusDisplay::new(&*self.session).block(
            BlockWidget::bordered()
                .title(Line::styled(" ROUND ", style::TITLE).centered())
                .border_style(style::DISABLED),
        );
        let input = GuessInputDisplay::new(&self.input)
            .enabled(self.session.is_round_active())
            .block(BlockWidget::bordered().border_style(style::DISABLED));
        let results = ResultsLogDisplay::new(self.session.summary()).block(
            BlockWidget::bordered()
                .title(Line::styled(" RESULTS ", style::TITLE).centered())
                .border_style(style::DISABLED),
        );

        let area = frame.area().centered_horizontally(Constraint::Max(72));
        let [
            title_area,
            subtitle_area,
            round_area,
            feedback_area,
            input_area,
            results_area,
            help_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(round_status.height()),
            Constraint::Length(1),
            Constraint::Length(input.height()),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Line::styled("Number Guessing Game", style::TITLE).centered(),
            title_area,
        );
        frame.render_widget(
            Line::styled(
                format!(
                    "Guess the number between {} and {}",
                    config.range_low(),
                    config.range_high()
                ),
                style::SUBTITLE,
            )
            .centered(),
            subtitle_area,
        );
        frame.render_widget(round_status, round_area);
        frame.render_widget(self.feedback_line().centered(), feedback_area);
        let input_width = input.width();
        frame.render_widget(
            input,
            input_area.centered_horizontally(Constraint::Length(input_width)),
        );
        frame.render_widget(results, results_area);
        frame.render_widget(KeyHelpDisplay::new(self.key_help()), help_area);
    }
}
