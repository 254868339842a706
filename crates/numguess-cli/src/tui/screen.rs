use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::App;

/// Individual screen in the application.
///
/// Only the topmost screen receives events. Drawing starts at the topmost
/// screen that is not an [overlay](Self::is_overlay), so dialogs render on
/// top of the screen that opened them.
pub trait Screen: fmt::Debug {
    /// Handles a terminal event and returns the resulting transition.
    fn handle_event(&mut self, event: &Event) -> ScreenTransition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);

    /// Returns `true` if the screens below stay visible behind this one.
    fn is_overlay(&self) -> bool {
        false
    }
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    Push(Box<dyn Screen>),

    /// Pop the current screen and return to the previous one.
    Pop,

    /// Exit the application.
    Exit,
}

/// Screen stack manager that implements [`App`].
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    /// Creates a new screen stack with an initial screen.
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    fn apply_transition(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Push(screen) => self.screens.push(screen),
            ScreenTransition::Pop => _ = self.screens.pop(),
            ScreenTransition::Exit => {
                self.screens.clear();
                self.should_exit = true;
            }
        }
    }

    /// Index of the first screen to draw.
    fn first_visible(&self) -> usize {
        self.screens
            .iter()
            .rposition(|screen| !screen.is_overlay())
            .unwrap_or(0)
    }
}

impl App for ScreenStack<'_> {
    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(&event);
            self.apply_transition(transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        for screen in &self.screens[self.first_visible()..] {
            screen.draw(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    /// Records which screens handled events.
    #[derive(Debug, Clone, Default)]
    struct EventLog {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl EventLog {
        fn log(&self, msg: impl Into<String>) {
            self.calls.borrow_mut().push(msg.into());
        }

        fn take(&self) -> Vec<String> {
            self.calls.take()
        }
    }

    #[derive(Debug)]
    struct TestScreen {
        name: &'static str,
        log: EventLog,
        overlay: bool,
        transitions: Vec<ScreenTransition>,
    }

    impl TestScreen {
        fn new(name: &'static str, log: &EventLog) -> Self {
            Self {
                name,
                log: log.clone(),
                overlay: false,
                transitions: vec![],
            }
        }

        fn overlay(self) -> Self {
            Self {
                overlay: true,
                ..self
            }
        }

        fn then(mut self, transition: ScreenTransition) -> Self {
            self.transitions.insert(0, transition);
            self
        }
    }

    impl Screen for TestScreen {
        fn handle_event(&mut self, _event: &Event) -> ScreenTransition {
            self.log.log(self.name);
            self.transitions.pop().unwrap_or(ScreenTransition::Stay)
        }

        fn draw(&self, _frame: &mut Frame) {}

        fn is_overlay(&self) -> bool {
            self.overlay
        }
    }

    fn key() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_events_go_to_topmost_screen() {
        let log = EventLog::default();
        let dialog = TestScreen::new("dialog", &log).then(ScreenTransition::Pop);
        let game = TestScreen::new("game", &log).then(ScreenTransition::Push(Box::new(dialog)));
        let mut stack = ScreenStack::new(Box::new(game));

        stack.handle_event(key());
        stack.handle_event(key());
        stack.handle_event(key());

        assert_eq!(log.take(), ["game", "dialog", "game"]);
        assert!(!stack.should_exit());
    }

    #[test]
    fn test_exit_clears_stack() {
        let log = EventLog::default();
        let game = TestScreen::new("game", &log).then(ScreenTransition::Exit);
        let mut stack = ScreenStack::new(Box::new(game));
        stack.apply_transition(ScreenTransition::Push(Box::new(TestScreen::new(
            "dialog", &log,
        ))));

        stack.apply_transition(ScreenTransition::Exit);
        assert!(stack.screens.is_empty());
        assert!(stack.should_exit());
    }

    #[test]
    fn test_popping_last_screen_exits() {
        let log = EventLog::default();
        let game = TestScreen::new("game", &log).then(ScreenTransition::Pop);
        let mut stack = ScreenStack::new(Box::new(game));

        assert!(!stack.should_exit());
        stack.handle_event(key());
        assert!(stack.should_exit());
    }

    #[test]
    fn test_overlays_keep_screen_below_visible() {
        let log = EventLog::default();
        let mut stack = ScreenStack::new(Box::new(TestScreen::new("game", &log)));
        assert_eq!(stack.first_visible(), 0);

        stack.apply_transition(ScreenTransition::Push(Box::new(
            TestScreen::new("dialog", &log).overlay(),
        )));
        assert_eq!(stack.first_visible(), 0);

        stack.apply_transition(ScreenTransition::Push(Box::new(TestScreen::new(
            "full", &log,
        ))));
        assert_eq!(stack.first_visible(), 2);
    }
}
