use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use deskcut::app_dirs;

/// Build a [`Config`] from the default locations, explicit files and the
/// `DESKCUT_` environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(environment());

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// `DESKCUT_FILTER__TERM=fire` style overrides; `filter.mime_types` is split on
/// commas.
fn environment() -> Environment {
	Environment::with_prefix("deskcut")
		.prefix_separator("_")
		.separator("__")
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("filter.mime_types")
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".deskcut.toml"));
		files.push(current_dir.join("deskcut.toml"));
	}

	files
}
