pub mod app;
mod board;
pub mod clock;
mod dialogs;
mod host;
mod hud;
pub mod session;
mod sound;
pub mod state;
