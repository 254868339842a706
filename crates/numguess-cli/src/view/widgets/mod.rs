use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    dialog_display::*, guess_input_display::*, key_help_display::*, results_log_display::*,
    round_status_display::*,
};

mod dialog_display;
mod guess_input_display;
mod key_help_display;
mod results_log_display;
mod round_status_display;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const DEFAULT: Style = Style::new().fg(Color::White);
    pub const TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
    pub const SUBTITLE: Style = Style::new().fg(Color::Gray);
    pub const ROUND: Style = Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD);
    pub const INFO: Style = Style::new().fg(Color::Green);
    pub const WARNING: Style = Style::new().fg(Color::Rgb(255, 165, 0));
    pub const SUCCESS: Style = Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD);
    pub const FAILURE: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);
    pub const GAUGE: Style = Style::new().fg(Color::Rgb(76, 175, 80));
    pub const DISABLED: Style = Style::new().fg(Color::DarkGray);
    pub const KEY: Style = Style::new().fg(Color::Cyan);
    pub const HELP: Style = Style::new().fg(Color::DarkGray);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
