use ratatui::widgets::ListState;
use tracing::info;

use super::config::UiConfig;
use super::theme::Theme;
use crate::apps::{AppChooser, ApplicationEntry};
use crate::shortcut::{Destinations, ShortcutOutcome, create_shortcut};

/// Lifecycle of the shortcut window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
	/// The placeholder row is active.
	Idle,
	/// An application is active.
	Selected,
	/// Quit was requested; the event loop stops.
	Terminated,
}

/// Control that receives `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Chooser,
	CreateButton,
	QuitButton,
}

impl Focus {
	pub(crate) fn next(self) -> Self {
		match self {
			Self::Chooser => Self::CreateButton,
			Self::CreateButton => Self::QuitButton,
			Self::QuitButton => Self::Chooser,
		}
	}

	pub(crate) fn previous(self) -> Self {
		match self {
			Self::Chooser => Self::QuitButton,
			Self::CreateButton => Self::Chooser,
			Self::QuitButton => Self::CreateButton,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
	Info,
	Success,
	Error,
}

/// Message shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
	pub level: StatusLevel,
	pub message: String,
}

impl StatusLine {
	fn new(level: StatusLevel, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	fn from_outcome(outcome: &ShortcutOutcome) -> Self {
		match outcome {
			ShortcutOutcome::NoSelection => Self::new(StatusLevel::Info, "No application selected"),
			ShortcutOutcome::Created { path, .. } => {
				Self::new(StatusLevel::Success, format!("Shortcut created at {}", path.display()))
			}
			ShortcutOutcome::Failed { attempts } => {
				let reason = attempts
					.last()
					.and_then(|attempt| attempt.result.as_ref().err())
					.map(ToString::to_string)
					.unwrap_or_else(|| "no destination available".to_string());
				Self::new(StatusLevel::Error, format!("Failed to create shortcut: {reason}"))
			}
		}
	}
}

/// The single window of the tool: an application chooser and two buttons.
pub struct ShortcutWindow {
	pub(crate) chooser: AppChooser,
	pub(crate) destinations: Destinations,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) list_state: ListState,
	pub(crate) focus: Focus,
	pub(crate) status: Option<StatusLine>,
	last_outcome: Option<ShortcutOutcome>,
	terminated: bool,
}

impl ShortcutWindow {
	/// Open the window over an already populated chooser.
	pub fn new(chooser: AppChooser, destinations: Destinations) -> Self {
		let mut list_state = ListState::default();
		list_state.select(Some(chooser.active()));
		Self {
			chooser,
			destinations,
			ui: UiConfig::default(),
			theme: Theme::default(),
			list_state,
			focus: Focus::default(),
			status: None,
			last_outcome: None,
			terminated: false,
		}
	}

	#[must_use]
	pub fn with_ui_config(mut self, ui: UiConfig) -> Self {
		self.ui = ui;
		self
	}

	pub fn chooser(&self) -> &AppChooser {
		&self.chooser
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn status(&self) -> Option<&StatusLine> {
		self.status.as_ref()
	}

	/// Outcome of the most recent "create shortcut" action.
	pub fn last_outcome(&self) -> Option<&ShortcutOutcome> {
		self.last_outcome.as_ref()
	}

	pub fn selected_entry(&self) -> Option<&ApplicationEntry> {
		self.chooser.selected_entry()
	}

	pub fn state(&self) -> WindowState {
		if self.terminated {
			WindowState::Terminated
		} else if self.chooser.selected_entry().is_some() {
			WindowState::Selected
		} else {
			WindowState::Idle
		}
	}

	pub fn is_terminated(&self) -> bool {
		self.terminated
	}

	/// Activate chooser row `index`, as a click on the combo box would.
	pub fn select(&mut self, index: usize) -> bool {
		let changed = index != self.chooser.active() && self.chooser.set_active(index);
		if changed {
			self.selection_changed();
		}
		changed
	}

	/// Copy the selected application's launcher onto the desktop.
	pub fn create_shortcut(&mut self) -> &ShortcutOutcome {
		let outcome = create_shortcut(self.chooser.selected_entry(), &self.destinations);
		self.status = Some(StatusLine::from_outcome(&outcome));
		self.last_outcome.insert(outcome)
	}

	/// Stop the event loop.
	pub fn quit(&mut self) {
		info!("exit requested");
		self.terminated = true;
	}

	pub(crate) fn selection_changed(&mut self) {
		self.list_state.select(Some(self.chooser.active()));
		match self.chooser.selected_entry() {
			Some(entry) => info!(app = %entry.name, path = %entry.path.display(), "application selected"),
			None => info!("no application selected"),
		}
	}
}
