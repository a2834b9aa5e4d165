//! File logging for the interactive session.
//!
//! The terminal is owned by the UI while it runs, so events go to
//! `<data dir>/logs/deskcut.log` instead of stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app_dirs;

pub const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "deskcut.log";

/// Keeps the background log writer alive; drop it to flush.
pub struct LoggingGuard {
	log_file: PathBuf,
	_worker: WorkerGuard,
}

impl LoggingGuard {
	pub fn log_file(&self) -> &Path {
		&self.log_file
	}
}

/// Install the global subscriber writing to the default log directory.
pub fn initialize(level: &str) -> Result<LoggingGuard> {
	let log_dir = app_dirs::get_log_dir()?;
	initialize_in(&log_dir, level)
}

/// Install the global subscriber writing to `log_dir`.
pub fn initialize_in(log_dir: &Path, level: &str) -> Result<LoggingGuard> {
	fs::create_dir_all(log_dir)
		.with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

	let filter = EnvFilter::try_new(level)
		.with_context(|| format!("invalid log level '{level}'"))?;

	let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
	let (writer, worker) = tracing_appender::non_blocking(appender);

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(false)
				.with_target(false)
				.with_writer(writer),
		)
		.try_init()
		.context("failed to install log subscriber")?;

	Ok(LoggingGuard {
		log_file: log_dir.join(LOG_FILE_NAME),
		_worker: worker,
	})
}
