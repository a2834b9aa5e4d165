use std::path::Path;

use anyhow::Result;
use deskcut::apps::{AppChooser, ApplicationEntry};
use serde::Serialize;

/// One `--list` JSON record, with the icon resolved the way the window shows it.
#[derive(Serialize)]
struct ListedApplication<'a> {
	name: &'a str,
	path: &'a Path,
	icon: &'a str,
	mime_types: &'a [String],
}

impl<'a> From<&'a ApplicationEntry> for ListedApplication<'a> {
	fn from(entry: &'a ApplicationEntry) -> Self {
		Self {
			name: &entry.name,
			path: entry.launcher(),
			icon: entry.icon_name(),
			mime_types: &entry.mime_types,
		}
	}
}

/// Print one `name<TAB>launcher` line per listed application.
pub(crate) fn print_plain(chooser: &AppChooser) {
	for entry in chooser.applications() {
		println!("{}\t{}", entry.name, entry.path.display());
	}
}

/// Format the listed applications as a JSON array.
pub(crate) fn format_list_json(chooser: &AppChooser) -> Result<String> {
	let listed: Vec<ListedApplication> = chooser.applications().iter().map(ListedApplication::from).collect();
	Ok(serde_json::to_string_pretty(&listed)?)
}

pub(crate) fn print_json(chooser: &AppChooser) -> Result<()> {
	println!("{}", format_list_json(chooser)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use deskcut::apps::{FilterCriteria, MISSING_ICON};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_lists_sorted_applications_with_resolved_icons() {
		let registry = vec![
			ApplicationEntry::new("Zed", "/apps/zed.desktop"),
			ApplicationEntry::new("Firefox", "/apps/firefox.desktop")
				.with_icon("firefox")
				.with_mime_types(["text/html"]),
		];
		let mut chooser = AppChooser::new(FilterCriteria::new());
		chooser.populate(&registry);

		let json = format_list_json(&chooser).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		let list = value.as_array().expect("array");
		assert_eq!(list.len(), 2);
		assert_eq!(list[0]["name"], "Firefox");
		assert_eq!(list[0]["path"], "/apps/firefox.desktop");
		assert_eq!(list[0]["icon"], "firefox");
		assert_eq!(list[0]["mime_types"][0], "text/html");
		assert_eq!(list[1]["icon"], MISSING_ICON);
		assert_eq!(list[1]["mime_types"], Value::Array(Vec::new()));
	}
}
