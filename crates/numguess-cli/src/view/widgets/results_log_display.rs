use numguess_engine::Summary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget},
};

use crate::view::{text, widgets::style};

/// Results of the concluded rounds, followed by total score and rank.
///
/// When the log is taller than the area, the oldest lines scroll out.
#[derive(Debug)]
pub struct ResultsLogDisplay<'a> {
    summary: Summary<'a>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ResultsLogDisplay<'a> {
    pub fn new(summary: Summary<'a>) -> Self {
        Self {
            summary,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for ResultsLogDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let log = text::results_log(self.summary);
        let last = log.len().saturating_sub(1);
        let lines: Vec<_> = log
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let style = match i {
                    0 => style::TITLE,
                    _ if i == last && !self.summary.is_empty() => style::SUCCESS,
                    _ => style::DEFAULT,
                };
                Line::styled(line, style)
            })
            .collect();

        let overflow = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_sub(area.height);
        Paragraph::new(lines)
            .scroll((overflow, 0))
            .render(area, buf);
    }
}
