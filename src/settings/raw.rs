use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;

use deskcut::apps::FilterCriteria;
use deskcut::logging::DEFAULT_LOG_LEVEL;
use deskcut::shortcut::Destinations;
use deskcut::ui::UiConfig;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// MIME categories listed when nothing else is configured.
pub(super) const DEFAULT_MIME_TYPES: &[&str] = &["application"];

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) filter: FilterSection,
	pub(super) shortcut: ShortcutSection,
	pub(super) ui: UiSection,
	pub(super) log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FilterSection {
	pub(super) term: Option<String>,
	pub(super) use_regex: Option<bool>,
	pub(super) mime_types: Option<Vec<String>>,
	pub(super) include_hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ShortcutSection {
	pub(super) primary_dir: Option<PathBuf>,
	pub(super) fallback_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) create_label: Option<String>,
	pub(super) quit_label: Option<String>,
	pub(super) placeholder_label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(term) = cli.filter.clone() {
			self.filter.term = Some(term);
		}
		if cli.regex {
			self.filter.use_regex = Some(true);
		}
		if let Some(mime_types) = cli.mime_types.clone() {
			self.filter.mime_types = Some(mime_types);
		}
		if cli.any_type {
			self.filter.mime_types = Some(Vec::new());
		}
		if let Some(value) = cli.show_hidden {
			self.filter.include_hidden = Some(value);
		}
		if let Some(dir) = cli.desktop_dir.clone() {
			self.shortcut.primary_dir = Some(dir);
		}
		if let Some(dir) = cli.fallback_dir.clone() {
			self.shortcut.fallback_dir = Some(dir);
		}
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let Self {
			filter,
			shortcut,
			ui,
			log,
		} = self;

		let mime_types = filter
			.mime_types
			.unwrap_or_else(|| DEFAULT_MIME_TYPES.iter().map(ToString::to_string).collect());
		let criteria = FilterCriteria::from_parts(
			filter.term.unwrap_or_default(),
			filter.use_regex.unwrap_or(false),
			mime_types,
		)
		.context("invalid [filter] configuration")?;

		let destinations = resolve_destinations(shortcut)?;

		Ok(ResolvedConfig {
			criteria,
			include_hidden: filter.include_hidden.unwrap_or(true),
			destinations,
			ui: resolve_ui(ui),
			log_level: log
				.level
				.filter(|level| !level.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		})
	}
}

fn resolve_destinations(section: ShortcutSection) -> Result<Destinations> {
	let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
	let expand = |path: PathBuf| expand_home(&path, home.as_deref());

	match (section.primary_dir, section.fallback_dir) {
		(Some(primary), Some(fallback)) => Ok(Destinations::new(expand(primary), expand(fallback))),
		(primary, fallback) => {
			let mut destinations =
				Destinations::resolve().context("failed to resolve desktop directories")?;
			if let Some(primary) = primary {
				destinations.primary = expand(primary);
			}
			if let Some(fallback) = fallback {
				destinations.fallback = expand(fallback);
			}
			Ok(destinations)
		}
	}
}

fn resolve_ui(section: UiSection) -> UiConfig {
	let defaults = UiConfig::default();
	let pick = |value: Option<String>, default: String| {
		value.filter(|value| !value.trim().is_empty()).unwrap_or(default)
	};
	UiConfig {
		title: pick(section.title, defaults.title),
		create_label: pick(section.create_label, defaults.create_label),
		quit_label: pick(section.quit_label, defaults.quit_label),
		placeholder_label: pick(section.placeholder_label, defaults.placeholder_label),
	}
}

/// Replace a leading `~` with the home directory.
pub(super) fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
	match (path.strip_prefix("~"), home) {
		(Ok(rest), Some(home)) => home.join(rest),
		_ => path.to_path_buf(),
	}
}

#[cfg(test)]
mod tests;
