use crate::apps::PLACEHOLDER_LABEL;

/// Text shown by the shortcut window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub create_label: String,
	pub quit_label: String,
	pub placeholder_label: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Desktop Shortcuts".to_string(),
			create_label: "Create shortcut".to_string(),
			quit_label: "Quit".to_string(),
			placeholder_label: PLACEHOLDER_LABEL.to_string(),
		}
	}
}
