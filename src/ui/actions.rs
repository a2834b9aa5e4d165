use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Focus, ShortcutWindow};

const PAGE_ROWS: isize = 10;

impl ShortcutWindow {
	/// Dispatch a key press.
	pub fn handle_key(&mut self, key: KeyEvent) {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			if key.code == KeyCode::Char('c') {
				self.quit();
			}
			return;
		}

		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => self.quit(),
			KeyCode::Char('c') => {
				self.create_shortcut();
			}
			KeyCode::Enter => self.activate_focused(),
			KeyCode::Tab | KeyCode::Right => self.focus = self.focus.next(),
			KeyCode::BackTab | KeyCode::Left => self.focus = self.focus.previous(),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection(|chooser| chooser.select_previous()),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection(|chooser| chooser.select_next()),
			KeyCode::PageUp => self.move_selection(|chooser| chooser.select_by(-PAGE_ROWS)),
			KeyCode::PageDown => self.move_selection(|chooser| chooser.select_by(PAGE_ROWS)),
			KeyCode::Home | KeyCode::Char('g') => self.move_selection(|chooser| chooser.select_first()),
			KeyCode::End | KeyCode::Char('G') => self.move_selection(|chooser| chooser.select_last()),
			_ => {}
		}
	}

	fn activate_focused(&mut self) {
		match self.focus {
			Focus::Chooser | Focus::CreateButton => {
				self.create_shortcut();
			}
			Focus::QuitButton => self.quit(),
		}
	}

	fn move_selection(&mut self, step: impl FnOnce(&mut crate::apps::AppChooser) -> bool) {
		if step(&mut self.chooser) {
			self.selection_changed();
		}
	}
}
