pub(super) use self::{dialog::DialogScreen, game::GameScreen};

mod dialog;
mod game;
