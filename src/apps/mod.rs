//! Installed application discovery, filtering and selection.

mod chooser;
mod entry;
mod filter;
mod registry;

pub use chooser::AppChooser;
pub use entry::{
	ApplicationEntry, ChooserRow, MISSING_ICON, PLACEHOLDER_ICON, PLACEHOLDER_LABEL, mime_category,
};
pub use filter::{FilterCriteria, FilterError};
pub use registry::{AppRegistry, DesktopRegistry};
