//! Copying a launcher file onto the desktop.
//!
//! A shortcut is created by copying the selected application's launcher into
//! the primary desktop directory. When that fails the fallback directory is
//! tried once. Every attempt is reported back in the [`ShortcutOutcome`] so the
//! caller can decide how to surface it; nothing here aborts the program.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::{BaseDirs, UserDirs};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::apps::ApplicationEntry;

/// Desktop folder name tried first unless the XDG desktop directory differs
/// from both fixed folders.
pub const PRIMARY_DESKTOP_NAME: &str = "Área de trabalho";
/// Desktop folder name tried when the primary copy fails.
pub const FALLBACK_DESKTOP_NAME: &str = "Desktop";

/// Why a single copy attempt failed.
#[derive(Debug, Error)]
pub enum ShortcutError {
	#[error("destination directory {} does not exist", .0.display())]
	MissingDestination(PathBuf),

	#[error("launcher path {} has no file name", .0.display())]
	InvalidSource(PathBuf),

	#[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
	Copy {
		from: PathBuf,
		to: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// The two directories a shortcut may be written to, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destinations {
	pub primary: PathBuf,
	pub fallback: PathBuf,
}

impl Destinations {
	pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
		Self {
			primary: primary.into(),
			fallback: fallback.into(),
		}
	}

	/// The fixed desktop folders below `home`.
	pub fn under_home(home: &Path) -> Self {
		Self::new(home.join(PRIMARY_DESKTOP_NAME), home.join(FALLBACK_DESKTOP_NAME))
	}

	/// Merge the fixed folders below `home` with the user's XDG desktop
	/// directory.
	///
	/// The XDG directory replaces the primary folder only when it is neither of
	/// the fixed folders, so an XDG desktop of `~/Desktop` keeps
	/// `~/Área de trabalho` as the first candidate.
	pub fn from_dirs(home: &Path, xdg_desktop: Option<&Path>) -> Self {
		let mut destinations = Self::under_home(home);
		if let Some(desktop) = xdg_desktop
			&& desktop != destinations.primary
			&& desktop != destinations.fallback
		{
			destinations.primary = desktop.to_path_buf();
		}
		destinations
	}

	/// Resolve the destinations for the current user.
	pub fn resolve() -> Result<Self> {
		let base = BaseDirs::new().ok_or_else(|| anyhow!("unable to determine home directory"))?;
		let user = UserDirs::new();
		let desktop = user.as_ref().and_then(UserDirs::desktop_dir);
		Ok(Self::from_dirs(base.home_dir(), desktop))
	}

	/// Directories to try, in order. A fallback equal to the primary is skipped.
	pub fn iter(&self) -> impl Iterator<Item = &Path> {
		let fallback = (self.fallback != self.primary).then_some(self.fallback.as_path());
		std::iter::once(self.primary.as_path()).chain(fallback)
	}
}

/// One try at copying the launcher into a destination directory.
#[derive(Debug)]
pub struct CopyAttempt {
	pub destination: PathBuf,
	pub result: Result<PathBuf, ShortcutError>,
}

/// Result of a "create shortcut" request.
#[derive(Debug)]
pub enum ShortcutOutcome {
	/// Nothing was selected; no copy was attempted.
	NoSelection,
	/// The launcher was copied to `path`. `attempts` includes any failed
	/// primary attempt that preceded the successful one.
	Created {
		path: PathBuf,
		attempts: Vec<CopyAttempt>,
	},
	/// Every destination failed.
	Failed { attempts: Vec<CopyAttempt> },
}

impl ShortcutOutcome {
	pub fn created_path(&self) -> Option<&Path> {
		match self {
			Self::Created { path, .. } => Some(path),
			_ => None,
		}
	}

	pub fn attempts(&self) -> &[CopyAttempt] {
		match self {
			Self::NoSelection => &[],
			Self::Created { attempts, .. } | Self::Failed { attempts } => attempts,
		}
	}
}

/// Copy the launcher of `selection` into the first destination that accepts it.
pub fn create_shortcut(
	selection: Option<&ApplicationEntry>,
	destinations: &Destinations,
) -> ShortcutOutcome {
	let Some(entry) = selection else {
		info!("no application selected, nothing to copy");
		return ShortcutOutcome::NoSelection;
	};

	let mut attempts = Vec::new();
	for destination in destinations.iter() {
		let result = copy_into(entry.launcher(), destination);
		match &result {
			Ok(path) => {
				let path = path.clone();
				info!(app = %entry.name, path = %path.display(), "created desktop shortcut");
				attempts.push(CopyAttempt {
					destination: destination.to_path_buf(),
					result,
				});
				return ShortcutOutcome::Created { path, attempts };
			}
			Err(err) => {
				warn!(app = %entry.name, destination = %destination.display(), error = %err, "shortcut attempt failed");
				attempts.push(CopyAttempt {
					destination: destination.to_path_buf(),
					result,
				});
			}
		}
	}

	error!(app = %entry.name, launcher = %entry.launcher().display(), "failed to create shortcut");
	ShortcutOutcome::Failed { attempts }
}

/// Copy `source` into directory `destination`, keeping its file name.
fn copy_into(source: &Path, destination: &Path) -> Result<PathBuf, ShortcutError> {
	if !destination.is_dir() {
		return Err(ShortcutError::MissingDestination(destination.to_path_buf()));
	}
	let file_name = source
		.file_name()
		.ok_or_else(|| ShortcutError::InvalidSource(source.to_path_buf()))?;
	let target = destination.join(file_name);
	fs::copy(source, &target).map_err(|source_err| ShortcutError::Copy {
		from: source.to_path_buf(),
		to: target.clone(),
		source: source_err,
	})?;
	Ok(target)
}
