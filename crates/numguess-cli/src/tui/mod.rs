//! Minimal terminal runtime: a blocking event loop driving a stack of screens.

pub use self::{
    app::App,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod runtime;
mod screen;
