//! warren-tui: Terminal viewer for generated levels
//!
//! Renders warren-core layouts with ratatui.

pub mod app;
pub mod display;
pub mod widgets;

pub use app::App;
pub use display::GraphicsMode;
