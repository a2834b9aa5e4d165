//! Pick an installed application and copy its launcher onto the desktop.
//!
//! [`apps`] discovers and filters installed applications, [`shortcut`] copies
//! a launcher into the desktop directory, and [`ui`] ties both together in a
//! single terminal window.

pub mod app_dirs;
pub mod apps;
pub mod logging;
pub mod shortcut;
pub mod ui;

pub use apps::{AppChooser, AppRegistry, ApplicationEntry, DesktopRegistry, FilterCriteria};
pub use shortcut::{Destinations, ShortcutOutcome, create_shortcut};
pub use ui::{ShortcutWindow, UiConfig, run};
