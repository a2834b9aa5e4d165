//! Sources of installed applications.
//!
//! [`DesktopRegistry`] reads freedesktop `.desktop` launchers from the XDG data
//! directories. Any slice or vector of [`ApplicationEntry`] values also acts as
//! a registry, which keeps the chooser testable without touching the system.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use freedesktop_desktop_entry as fde;
use tracing::debug;

use super::entry::ApplicationEntry;

/// Read-only view of the applications installed on the system.
pub trait AppRegistry {
	/// Every known application, in no particular order.
	fn applications(&self) -> Vec<ApplicationEntry>;
}

impl AppRegistry for [ApplicationEntry] {
	fn applications(&self) -> Vec<ApplicationEntry> {
		self.to_vec()
	}
}

impl AppRegistry for Vec<ApplicationEntry> {
	fn applications(&self) -> Vec<ApplicationEntry> {
		self.clone()
	}
}

/// Registry backed by desktop entry files.
#[derive(Debug, Clone)]
pub struct DesktopRegistry {
	search_paths: Vec<PathBuf>,
	locales: Vec<String>,
	include_hidden: bool,
}

impl DesktopRegistry {
	/// Registry over the default XDG application directories, localized for the
	/// current user.
	pub fn from_env() -> Self {
		Self {
			search_paths: fde::default_paths().collect(),
			locales: fde::get_languages_from_env(),
			include_hidden: true,
		}
	}

	/// Registry over explicit directories, without localization.
	pub fn with_search_paths<I, P>(paths: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			search_paths: paths.into_iter().map(Into::into).collect(),
			locales: Vec::new(),
			include_hidden: true,
		}
	}

	/// Whether `NoDisplay=true` entries are listed.
	#[must_use]
	pub fn include_hidden(mut self, include_hidden: bool) -> Self {
		self.include_hidden = include_hidden;
		self
	}

	pub fn search_paths(&self) -> &[PathBuf] {
		&self.search_paths
	}

	fn read_entry(&self, path: PathBuf) -> Option<ApplicationEntry> {
		let entry = match fde::DesktopEntry::from_path(path.clone(), Some(self.locales.as_slice())) {
			Ok(entry) => entry,
			Err(err) => {
				debug!(path = %path.display(), error = %err, "skipping unreadable desktop entry");
				return None;
			}
		};

		if entry.desktop_entry("Type") != Some("Application") {
			return None;
		}
		if is_true(entry.desktop_entry("Hidden")) {
			return None;
		}
		if !self.include_hidden && is_true(entry.desktop_entry("NoDisplay")) {
			return None;
		}

		let name = entry.name(self.locales.as_slice())?.into_owned();
		let icon = entry
			.desktop_entry("Icon")
			.map(str::trim)
			.filter(|icon| !icon.is_empty())
			.map(str::to_string);
		let mime_types = entry
			.desktop_entry("MimeType")
			.map(split_list)
			.unwrap_or_default();

		Some(ApplicationEntry {
			name,
			path,
			icon,
			mime_types,
		})
	}
}

impl AppRegistry for DesktopRegistry {
	fn applications(&self) -> Vec<ApplicationEntry> {
		let mut seen = HashSet::new();
		let applications: Vec<ApplicationEntry> = fde::Iter::new(self.search_paths.iter().cloned())
			.filter_map(|path| self.read_entry(path))
			.filter(|entry| seen.insert(desktop_id(&entry.path)))
			.collect();
		debug!(
			count = applications.len(),
			paths = self.search_paths.len(),
			"loaded desktop entries"
		);
		applications
	}
}

/// Desktop id used to collapse entries shadowed by earlier search paths.
fn desktop_id(path: &Path) -> String {
	path.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.display().to_string())
}

fn is_true(value: Option<&str>) -> bool {
	value.is_some_and(|value| value.trim() == "true")
}

/// Split a `;`-separated desktop entry list, dropping empty items.
fn split_list(value: &str) -> Vec<String> {
	value
		.split(';')
		.map(str::trim)
		.filter(|item| !item.is_empty())
		.map(str::to_string)
		.collect()
}
