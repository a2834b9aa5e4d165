use std::path::Path;

use deskcut::apps::FilterCriteria;
use deskcut::shortcut::Destinations;
use deskcut::ui::UiConfig;

/// Validated configuration derived from files, environment and CLI flags.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub criteria: FilterCriteria,
	pub include_hidden: bool,
	pub destinations: Destinations,
	pub ui: UiConfig,
	pub log_level: String,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self, log_file: Option<&Path>) {
		println!("Effective configuration:");
		match self.criteria.filter_term() {
			"" => println!("  Name filter: (none)"),
			term if self.criteria.use_regex() => println!("  Name filter: /{term}/"),
			term => println!("  Name filter: {term}"),
		}
		if self.criteria.mime_types().is_empty() {
			println!("  MIME types: (any)");
		} else {
			println!("  MIME types: {}", self.criteria.mime_types().join(", "));
		}
		println!("  Include NoDisplay entries: {}", bool_to_word(self.include_hidden));
		println!("  Desktop directory: {}", self.destinations.primary.display());
		println!("  Fallback directory: {}", self.destinations.fallback.display());
		println!("  Window title: {}", self.ui.title);
		println!("  Log level: {}", self.log_level);
		match log_file {
			Some(path) => println!("  Log file: {}", path.display()),
			None => println!("  Log file: (disabled)"),
		}
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}
