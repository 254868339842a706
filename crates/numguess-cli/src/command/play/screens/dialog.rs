use crossterm::event::{Event, KeyCode};
use ratatui::{Frame, style::Style};

use crate::{
    tui::{Screen, ScreenTransition},
    view::widgets::{DialogDisplay, style},
};

/// Message box on top of the game screen, closed with Enter, Esc or Space.
#[derive(Debug)]
pub struct DialogScreen {
    title: String,
    lines: Vec<String>,
    style: Style,
}

impl DialogScreen {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            style: style::DEFAULT,
        }
    }

    pub fn error(message: String) -> Self {
        Self::new("Error", vec![message]).style(style::FAILURE)
    }

    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

impl Screen for DialogScreen {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_press_event() else {
            return ScreenTransition::Stay;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ScreenTransition::Pop,
            _ => ScreenTransition::Stay,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let dialog = DialogDisplay::new(&self.title, &self.lines).style(self.style);
        let area = dialog.centered_in(frame.area());
        frame.render_widget(dialog, area);
    }

    fn is_overlay(&self) -> bool {
        true
    }
}
