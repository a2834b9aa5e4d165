use std::path::{Path, PathBuf};

use clap::Parser;

use super::{RawConfig, expand_home};
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"deskcut",
		"--filter",
		"fire",
		"--regex",
		"--mime",
		"image,text",
		"--show-hidden",
		"false",
		"--desktop-dir",
		"/tmp/desk",
		"--fallback-dir",
		"/tmp/fallback",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.filter.term = Some("old".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.filter.term.as_deref(), Some("fire"));
	assert_eq!(config.filter.use_regex, Some(true));
	assert_eq!(config.filter.mime_types, Some(vec!["image".into(), "text".into()]));
	assert_eq!(config.filter.include_hidden, Some(false));
	assert_eq!(config.shortcut.primary_dir, Some(PathBuf::from("/tmp/desk")));
	assert_eq!(config.shortcut.fallback_dir, Some(PathBuf::from("/tmp/fallback")));
	assert_eq!(config.log.level.as_deref(), Some("debug"));
}

#[test]
fn absent_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["deskcut"]);
	let mut config = RawConfig::default();
	config.filter.use_regex = Some(true);
	config.filter.mime_types = Some(vec!["audio".into()]);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.filter.use_regex, Some(true));
	assert_eq!(config.filter.mime_types, Some(vec!["audio".into()]));
}

#[test]
fn any_type_clears_mime_filter() {
	let cli = CliArgs::parse_from(["deskcut", "--any-type"]);
	let mut config = RawConfig::default();
	config.filter.mime_types = Some(vec!["audio".into()]);
	config.apply_cli_overrides(&cli);

	let resolved = with_fixed_dirs(config).resolve().unwrap();
	assert!(resolved.criteria.mime_types().is_empty());
}

#[test]
fn defaults_filter_on_application_category() {
	let resolved = with_fixed_dirs(RawConfig::default()).resolve().unwrap();

	assert_eq!(resolved.criteria.mime_types(), ["application".to_string()]);
	assert_eq!(resolved.criteria.filter_term(), "");
	assert!(!resolved.criteria.use_regex());
	assert!(resolved.include_hidden);
	assert_eq!(resolved.log_level, "info");
	assert_eq!(resolved.ui.title, "Desktop Shortcuts");
}

#[test]
fn invalid_regex_is_reported() {
	let mut config = with_fixed_dirs(RawConfig::default());
	config.filter.term = Some("[unclosed".into());
	config.filter.use_regex = Some(true);

	let err = config.resolve().unwrap_err();
	assert!(format!("{err:#}").contains("invalid filter pattern"));
}

#[test]
fn blank_labels_fall_back_to_defaults() {
	let mut config = with_fixed_dirs(RawConfig::default());
	config.ui.title = Some("  ".into());
	config.ui.quit_label = Some("Sair".into());

	let resolved = config.resolve().unwrap();
	assert_eq!(resolved.ui.title, "Desktop Shortcuts");
	assert_eq!(resolved.ui.quit_label, "Sair");
}

#[test]
fn explicit_destinations_are_used_verbatim() {
	let resolved = with_fixed_dirs(RawConfig::default()).resolve().unwrap();
	assert_eq!(resolved.destinations.primary, Path::new("/srv/desk"));
	assert_eq!(resolved.destinations.fallback, Path::new("/srv/fallback"));
}

#[test]
fn tilde_expands_to_home() {
	let home = Path::new("/home/user");
	assert_eq!(
		expand_home(Path::new("~/Desktop"), Some(home)),
		PathBuf::from("/home/user/Desktop")
	);
	assert_eq!(expand_home(Path::new("/abs"), Some(home)), PathBuf::from("/abs"));
	assert_eq!(expand_home(Path::new("~/x"), None), PathBuf::from("~/x"));
}

fn with_fixed_dirs(mut config: RawConfig) -> RawConfig {
	config.shortcut.primary_dir = Some("/srv/desk".into());
	config.shortcut.fallback_dir = Some("/srv/fallback".into());
	config
}
