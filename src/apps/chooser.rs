use tracing::debug;

use super::entry::{ApplicationEntry, ChooserRow};
use super::filter::FilterCriteria;
use super::registry::AppRegistry;

/// Filtered, sorted list of applications with a leading placeholder row.
///
/// Row 0 is always the placeholder standing for "no application selected";
/// row `i > 0` is the `i - 1`th application in display-name order.
#[derive(Debug, Clone, Default)]
pub struct AppChooser {
	criteria: FilterCriteria,
	applications: Vec<ApplicationEntry>,
	active: usize,
}

impl AppChooser {
	pub fn new(criteria: FilterCriteria) -> Self {
		Self {
			criteria,
			applications: Vec::new(),
			active: 0,
		}
	}

	/// Replace the filter criteria.
	///
	/// The list is not refiltered; the new criteria apply from the next
	/// [`populate`](Self::populate) call onwards.
	pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
		self.criteria = criteria;
	}

	pub fn criteria(&self) -> &FilterCriteria {
		&self.criteria
	}

	/// Fill the list from `registry` and reset the selection to the placeholder.
	///
	/// Returns the number of applications kept. An empty result is valid and
	/// leaves only the placeholder row.
	pub fn populate<R>(&mut self, registry: &R) -> usize
	where
		R: AppRegistry + ?Sized,
	{
		let available = registry.applications();
		let total = available.len();

		let mut applications: Vec<ApplicationEntry> = available
			.into_iter()
			.filter(|entry| self.criteria.matches(entry))
			.collect();
		applications.sort_by(|a, b| a.name.cmp(&b.name));

		debug!(
			total,
			kept = applications.len(),
			term = self.criteria.filter_term(),
			mime_types = ?self.criteria.mime_types(),
			"populated application chooser"
		);

		self.applications = applications;
		self.active = 0;
		self.applications.len()
	}

	/// Applications in display order, without the placeholder.
	pub fn applications(&self) -> &[ApplicationEntry] {
		&self.applications
	}

	/// Every row, placeholder first.
	pub fn rows(&self) -> impl Iterator<Item = ChooserRow<'_>> + '_ {
		std::iter::once(ChooserRow::Placeholder)
			.chain(self.applications.iter().map(ChooserRow::Application))
	}

	pub fn row(&self, index: usize) -> Option<ChooserRow<'_>> {
		match index {
			0 => Some(ChooserRow::Placeholder),
			_ => self
				.applications
				.get(index - 1)
				.map(ChooserRow::Application),
		}
	}

	/// Number of rows including the placeholder.
	pub fn len(&self) -> usize {
		self.applications.len() + 1
	}

	/// Always false: the placeholder row is always present.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Index of the active row.
	pub fn active(&self) -> usize {
		self.active
	}

	/// Activate row `index`; out-of-range indices leave the selection untouched.
	pub fn set_active(&mut self, index: usize) -> bool {
		if index < self.len() {
			self.active = index;
			true
		} else {
			false
		}
	}

	/// Application behind the active row, or `None` for the placeholder.
	pub fn selected_entry(&self) -> Option<&ApplicationEntry> {
		self.row(self.active).and_then(|row| row.entry())
	}

	/// Move the selection down one row. Returns whether it changed.
	pub fn select_next(&mut self) -> bool {
		self.select_by(1)
	}

	/// Move the selection up one row. Returns whether it changed.
	pub fn select_previous(&mut self) -> bool {
		self.select_by(-1)
	}

	pub fn select_first(&mut self) -> bool {
		self.move_to(0)
	}

	pub fn select_last(&mut self) -> bool {
		self.move_to(self.len() - 1)
	}

	/// Move the selection by `delta` rows, clamped to the list bounds.
	pub fn select_by(&mut self, delta: isize) -> bool {
		let last = self.len() - 1;
		let target = self.active.saturating_add_signed(delta).min(last);
		self.move_to(target)
	}

	fn move_to(&mut self, index: usize) -> bool {
		let changed = index != self.active;
		self.active = index;
		changed
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::apps::entry::PLACEHOLDER_LABEL;

	fn app(name: &str, types: &[&str]) -> ApplicationEntry {
		ApplicationEntry::new(name, format!("/usr/share/applications/{name}.desktop"))
			.with_mime_types(types.iter().copied())
	}

	fn labels(chooser: &AppChooser) -> Vec<&str> {
		chooser.rows().map(|row| row.label(PLACEHOLDER_LABEL)).collect()
	}

	#[test]
	fn mime_category_filter_keeps_matching_applications() {
		let registry = vec![app("A", &["application/x-foo"]), app("B", &["text/plain"])];
		let criteria = FilterCriteria::new().with_mime_types(["application"]).unwrap();
		let mut chooser = AppChooser::new(criteria);

		assert_eq!(chooser.populate(&registry), 1);
		assert_eq!(labels(&chooser), vec![PLACEHOLDER_LABEL, "A"]);
	}

	#[test]
	fn name_filter_is_case_insensitive_substring() {
		let registry = vec![app("Firefox", &[]), app("Files", &[])];
		let criteria = FilterCriteria::new().with_filter_term("fire").unwrap();
		let mut chooser = AppChooser::new(criteria);

		chooser.populate(&registry);
		assert_eq!(labels(&chooser), vec![PLACEHOLDER_LABEL, "Firefox"]);
	}

	#[test]
	fn rows_are_sorted_with_placeholder_first() {
		let registry = vec![
			app("terminal", &[]),
			app("Zed", &[]),
			app("Archive Manager", &[]),
			app("Zathura", &[]),
		];
		let mut chooser = AppChooser::new(FilterCriteria::new());
		chooser.populate(&registry);

		// Plain byte order: uppercase sorts before lowercase.
		assert_eq!(
			labels(&chooser),
			vec![PLACEHOLDER_LABEL, "Archive Manager", "Zathura", "Zed", "terminal"]
		);
	}

	#[test]
	fn entries_without_types_are_dropped_by_mime_filter() {
		let registry = vec![app("Clock", &[]), app("Viewer", &["image/png"])];
		let criteria = FilterCriteria::new().with_mime_types(["image"]).unwrap();
		let mut chooser = AppChooser::new(criteria);

		chooser.populate(&registry);
		assert_eq!(labels(&chooser), vec![PLACEHOLDER_LABEL, "Viewer"]);
	}

	#[test]
	fn empty_result_keeps_only_placeholder() {
		let registry = vec![app("Files", &[])];
		let criteria = FilterCriteria::new().with_filter_term("nothing").unwrap();
		let mut chooser = AppChooser::new(criteria);

		assert_eq!(chooser.populate(&registry), 0);
		assert_eq!(chooser.len(), 1);
		assert!(chooser.selected_entry().is_none());
		assert!(!chooser.select_next());
	}

	#[test]
	fn selection_maps_rows_to_entries() {
		let registry = vec![app("Beta", &[]), app("Alpha", &[])];
		let mut chooser = AppChooser::new(FilterCriteria::new());
		chooser.populate(&registry);

		assert_eq!(chooser.active(), 0);
		assert!(chooser.selected_entry().is_none());

		assert!(chooser.set_active(2));
		assert_eq!(chooser.selected_entry().map(|entry| entry.name.as_str()), Some("Beta"));

		assert!(chooser.set_active(1));
		assert_eq!(chooser.selected_entry().map(|entry| entry.name.as_str()), Some("Alpha"));

		assert!(!chooser.set_active(3));
		assert_eq!(chooser.active(), 1);
	}

	#[test]
	fn navigation_is_clamped() {
		let registry = vec![app("One", &[]), app("Two", &[])];
		let mut chooser = AppChooser::new(FilterCriteria::new());
		chooser.populate(&registry);

		assert!(!chooser.select_previous());
		assert!(chooser.select_last());
		assert_eq!(chooser.active(), 2);
		assert!(!chooser.select_next());
		assert!(chooser.select_by(-10));
		assert_eq!(chooser.active(), 0);
		assert!(chooser.select_by(10));
		assert_eq!(chooser.active(), 2);
		assert!(chooser.select_first());
		assert_eq!(chooser.active(), 0);
	}

	#[test]
	fn populate_resets_selection_and_uses_new_criteria() {
		let registry = vec![app("Firefox", &[]), app("Files", &[])];
		let mut chooser = AppChooser::new(FilterCriteria::new());
		chooser.populate(&registry);
		chooser.set_active(2);

		chooser.set_filter_criteria(FilterCriteria::new().with_filter_term("files").unwrap());
		assert_eq!(chooser.len(), 3, "criteria alone do not refilter");

		chooser.populate(&registry);
		assert_eq!(chooser.active(), 0);
		assert_eq!(labels(&chooser), vec![PLACEHOLDER_LABEL, "Files"]);
	}
}
