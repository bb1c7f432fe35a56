//! Widgets composing the viewer screen

mod map;
mod status;

pub use map::LevelWidget;
pub use status::StatusWidget;
