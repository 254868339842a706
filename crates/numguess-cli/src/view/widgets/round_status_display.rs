use numguess_engine::{GameSession, RoundState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Gauge, Widget},
};

use crate::view::widgets::style;

/// Round counter, attempt gauge and the guesses made so far.
#[derive(Debug)]
pub struct RoundStatusDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> RoundStatusDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        4 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for RoundStatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let config = self.session.config();
        let round = self.session.current_round();
        let attempts_used = round.map_or(0, RoundState::attempts_used);
        let max_attempts = config.max_attempts();

        let [round_area, gauge_area, attempts_area, guesses_area] =
            Layout::vertical([Constraint::Length(1); 4]).areas(area);

        Line::styled(
            format!(
                "Round: {}/{}",
                self.session.current_round_number(),
                config.max_rounds()
            ),
            style::ROUND,
        )
        .centered()
        .render(round_area, buf);

        let ratio = (f64::from(attempts_used) / f64::from(max_attempts)).clamp(0.0, 1.0);
        Gauge::default()
            .gauge_style(style::GAUGE)
            .ratio(ratio)
            .label("")
            .render(gauge_area.centered_horizontally(Constraint::Max(40)), buf);

        Line::styled(
            format!("Attempts: {attempts_used}/{max_attempts}"),
            style::DEFAULT,
        )
        .centered()
        .render(attempts_area, buf);

        let guesses = round.map(RoundState::guesses).unwrap_or_default();
        if !guesses.is_empty() {
            let list = guesses
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Line::styled(format!("Guesses: {list}"), style::DISABLED)
                .centered()
                .render(guesses_area, buf);
        }
    }
}
