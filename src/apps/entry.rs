use std::path::{Path, PathBuf};

/// Icon shown next to the placeholder row.
pub const PLACEHOLDER_ICON: &str = "gtk-search";
/// Icon used for applications that do not declare one.
pub const MISSING_ICON: &str = "gtk-missing-icon";
/// Default label of the leading "no application selected" row.
pub const PLACEHOLDER_LABEL: &str = "(Choose An App)";

/// One installed application as reported by the application registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationEntry {
	pub name: String,
	pub path: PathBuf,
	pub icon: Option<String>,
	pub mime_types: Vec<String>,
}

impl ApplicationEntry {
	pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
			icon: None,
			mime_types: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	#[must_use]
	pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.mime_types = mime_types.into_iter().map(Into::into).collect();
		self
	}

	/// Launcher file this entry was read from.
	pub fn launcher(&self) -> &Path {
		&self.path
	}

	/// Icon identifier, falling back to [`MISSING_ICON`] when none is declared.
	pub fn icon_name(&self) -> &str {
		self.icon
			.as_deref()
			.filter(|icon| !icon.is_empty())
			.unwrap_or(MISSING_ICON)
	}

	/// Whether `requested` names one of the supported types exactly or one of
	/// their categories.
	pub fn supports(&self, requested: &str) -> bool {
		self.mime_types
			.iter()
			.any(|mime| mime == requested || mime_category(mime) == requested)
	}
}

/// Text before the first `/` of a MIME type, or the whole value without one.
pub fn mime_category(mime: &str) -> &str {
	mime.split_once('/').map_or(mime, |(category, _)| category)
}

/// A row of the chooser list: the placeholder or one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserRow<'a> {
	Placeholder,
	Application(&'a ApplicationEntry),
}

impl<'a> ChooserRow<'a> {
	/// Text shown for this row; the placeholder uses `placeholder`.
	pub fn label<'s>(&self, placeholder: &'s str) -> &'s str
	where
		'a: 's,
	{
		match *self {
			Self::Placeholder => placeholder,
			Self::Application(entry) => entry.name.as_str(),
		}
	}

	pub fn icon_name(&self) -> &'a str {
		match *self {
			Self::Placeholder => PLACEHOLDER_ICON,
			Self::Application(entry) => entry.icon_name(),
		}
	}

	pub fn entry(&self) -> Option<&'a ApplicationEntry> {
		match *self {
			Self::Placeholder => None,
			Self::Application(entry) => Some(entry),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_or_empty_icon_uses_generic_icon() {
		let bare = ApplicationEntry::new("Bare", "/apps/bare.desktop");
		assert_eq!(bare.icon_name(), MISSING_ICON);

		let empty = bare.clone().with_icon("");
		assert_eq!(empty.icon_name(), MISSING_ICON);

		let named = bare.with_icon("firefox");
		assert_eq!(named.icon_name(), "firefox");
	}

	#[test]
	fn supports_exact_types_and_categories() {
		let viewer = ApplicationEntry::new("Viewer", "/apps/viewer.desktop")
			.with_mime_types(["image/png", "image/jpeg", "application/pdf"]);

		assert!(viewer.supports("image/png"));
		assert!(viewer.supports("image"));
		assert!(viewer.supports("application"));
		assert!(!viewer.supports("image/gif"));
		assert!(!viewer.supports("text"));
	}

	#[test]
	fn entry_without_types_supports_nothing() {
		let entry = ApplicationEntry::new("Plain", "/apps/plain.desktop");
		assert!(!entry.supports("application"));
	}

	#[test]
	fn placeholder_row_uses_given_label_and_fixed_icon() {
		let row = ChooserRow::Placeholder;
		assert_eq!(row.label("(Escolha)"), "(Escolha)");
		assert_eq!(row.icon_name(), PLACEHOLDER_ICON);
		assert!(row.entry().is_none());

		let entry = ApplicationEntry::new("Firefox", "/apps/firefox.desktop");
		assert_eq!(ChooserRow::Application(&entry).label(PLACEHOLDER_LABEL), "Firefox");
	}
}
