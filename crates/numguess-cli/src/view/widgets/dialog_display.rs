use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, BorderType, Clear, Paragraph, Widget},
};

use crate::view::widgets::style;

const FOOTER: &str = "[Enter] OK";

/// Modal message box drawn over whatever is below it.
#[derive(Debug)]
pub struct DialogDisplay<'a> {
    title: &'a str,
    lines: &'a [String],
    style: Style,
}

impl<'a> DialogDisplay<'a> {
    pub fn new(title: &'a str, lines: &'a [String]) -> Self {
        Self {
            title,
            lines,
            style: style::DEFAULT,
        }
    }

    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    fn block(&self) -> BlockWidget<'a> {
        BlockWidget::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style)
            .title(Line::styled(format!(" {} ", self.title), style::TITLE).centered())
            .title_bottom(Line::styled(FOOTER, style::HELP).centered())
    }

    pub fn width(&self) -> u16 {
        let content = self
            .lines
            .iter()
            .map(String::len)
            .chain([self.title.len() + 2, FOOTER.len()])
            .max()
            .unwrap_or(0);
        let content = u16::try_from(content).unwrap_or(u16::MAX);
        content.saturating_add(2 + super::block_horizontal_margin(Some(&self.block())))
    }

    pub fn height(&self) -> u16 {
        let lines = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        lines.saturating_add(super::block_vertical_margin(Some(&self.block())))
    }

    /// Area of `width()` x `height()` centered in `area`.
    pub fn centered_in(&self, area: Rect) -> Rect {
        area.centered(
            Constraint::Length(self.width()),
            Constraint::Length(self.height()),
        )
    }
}

impl Widget for DialogDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let lines: Vec<_> = self
            .lines
            .iter()
            .map(|line| Line::styled(line.as_str(), self.style))
            .collect();
        Paragraph::new(lines)
            .centered()
            .block(self.block())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_fits_longest_line() {
        let lines = ["Congratulations!".to_owned(), "Score: 160".to_owned()];
        let dialog = DialogDisplay::new("Round 1", &lines);
        assert_eq!(dialog.width(), 16 + 2 + 2);
        assert_eq!(dialog.height(), 2 + 2);
    }

    #[test]
    fn test_renders_lines_inside_border() {
        let lines = ["Hello".to_owned()];
        let dialog = DialogDisplay::new("Hi", &lines);
        let area = dialog.centered_in(Rect::new(0, 0, 40, 10));
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        dialog.render(area, &mut buf);

        let row: String = (area.x..area.right())
            .map(|x| buf[(x, area.y + 1)].symbol())
            .collect();
        assert!(row.contains("Hello"));
        assert_eq!(buf[(area.x, area.y)].symbol(), "╭");
    }
}
