//! The shortcut window: an application chooser with "create" and "quit"
//! buttons, drawn with `ratatui`.
//!
//! [`ShortcutWindow`] holds all interactive state. [`run`] drives it from
//! terminal events; tests drive it directly through
//! [`ShortcutWindow::handle_key`] and [`ShortcutWindow::draw`].

mod actions;
mod config;
mod render;
mod runtime;
mod state;
mod theme;


pub use config::UiConfig;
pub use runtime::run;
pub use state::{Focus, ShortcutWindow, StatusLevel, StatusLine, WindowState};
pub use theme::{SLATE, Theme};
