use crossterm::event::Event;
use ratatui::Frame;

/// Trait for applications executed by [`Runtime::run`](super::Runtime::run).
pub trait App {
    /// Returns whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, resize, ...).
    fn handle_event(&mut self, event: Event);

    /// Draws the whole frame.
    fn draw(&self, frame: &mut Frame);
}
