use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

const PROMPT: &str = "Your guess: ";
const CURSOR: &str = "_";

/// Single-line guess entry. Greyed out while no round accepts guesses.
#[derive(Debug)]
pub struct GuessInputDisplay<'a> {
    text: &'a str,
    enabled: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GuessInputDisplay<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            enabled: true,
            block: None,
        }
    }

    pub fn enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        1 + super::block_vertical_margin(self.block.as_ref())
    }

    pub fn width(&self) -> u16 {
        24 + super::block_horizontal_margin(self.block.as_ref())
    }

    fn line_width(&self) -> u16 {
        let len = PROMPT.len() + self.text.len() + CURSOR.len();
        u16::try_from(len).unwrap_or(u16::MAX)
    }
}

impl Widget for GuessInputDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let line = if self.enabled {
            Line::from(vec![
                Span::styled(PROMPT, style::SUBTITLE),
                Span::styled(self.text, style::TITLE),
                Span::styled(CURSOR, style::KEY),
            ])
        } else {
            Line::from(vec![
                Span::styled(PROMPT, style::DISABLED),
                Span::styled(self.text, style::DISABLED),
            ])
        };
        let width = self.line_width();
        line.render(area.centered_horizontally(Constraint::Length(width)), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_row(display: GuessInputDisplay<'_>, width: u16) -> (String, Buffer) {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        let row = (0..width).map(|x| buf[(x, 0)].symbol()).collect();
        (row, buf)
    }

    #[test]
    fn test_enabled_input_shows_cursor() {
        let (row, _) = render_row(GuessInputDisplay::new("42"), 15);
        assert_eq!(row, "Your guess: 42_");
    }

    #[test]
    fn test_disabled_input_is_greyed_out() {
        let (row, buf) = render_row(GuessInputDisplay::new("42").enabled(false), 15);
        assert_eq!(row.trim_end(), "Your guess: 42");
        assert_eq!(buf[(12, 0)].fg, style::DISABLED.fg.unwrap());
    }
}
