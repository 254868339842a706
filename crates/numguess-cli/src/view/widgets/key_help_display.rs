use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::view::widgets::style;

/// Keys and what they do, e.g. `(&["q", "Esc"], "Quit")`.
pub type KeyHelp<'a> = (&'a [&'a str], &'a str);

#[derive(Debug)]
pub struct KeyHelpDisplay<'a> {
    bindings: &'a [KeyHelp<'a>],
}

impl<'a> KeyHelpDisplay<'a> {
    pub fn new(bindings: &'a [KeyHelp<'a>]) -> Self {
        Self { bindings }
    }
}

impl Widget for KeyHelpDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", style::HELP));
            }
            for (j, key) in keys.iter().copied().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", style::HELP));
                }
                spans.push(Span::styled(key, style::KEY));
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(desc, style::DEFAULT));
        }

        Line::from(spans).centered().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_bindings_on_one_line() {
        let bindings: &[KeyHelp] = &[(&["Enter"], "Guess"), (&["q", "Esc"], "Quit")];
        let area = Rect::new(0, 0, 24, 1);
        let mut buf = Buffer::empty(area);
        KeyHelpDisplay::new(bindings).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(row, "Enter Guess | q/Esc Quit");
    }

    #[test]
    fn test_line_is_centered_in_wider_area() {
        let bindings: &[KeyHelp] = &[(&["n"], "Next")];
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        KeyHelpDisplay::new(bindings).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(row, "  n Next  ");
    }
}
