pub mod text;
pub mod widgets;
