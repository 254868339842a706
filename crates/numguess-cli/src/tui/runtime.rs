use std::io;

use crossterm::event;

use crate::tui::{App, event::TuiEvent};

/// Terminal application runtime.
///
/// Nothing in a guessing game changes without player input, so the loop
/// blocks on the terminal and redraws only after an event was handled.
#[derive(Debug)]
pub struct Runtime {
    dirty: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// Creates a runtime whose first event is the initial render.
    #[must_use]
    pub fn new() -> Self {
        Self { dirty: true }
    }

    fn next_event(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }

    /// Runs `app` until [`App::should_exit`] returns true.
    ///
    /// The terminal is put into raw mode and the alternate screen for the
    /// duration of the call and restored afterwards, also on error.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.next_event()? {
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(event),
                }
            }
            Ok(())
        })
    }
}
