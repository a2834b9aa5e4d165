use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Rect},
	text::{Line, Span},
	widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::{Focus, ShortcutWindow, StatusLevel};

const KEY_HINTS: &str = "↑/↓ select · Enter activate · Tab focus · c create · q quit";

impl ShortcutWindow {
	pub fn draw(&mut self, frame: &mut Frame) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border)
			.title(Span::styled(format!(" {} ", self.ui.title), self.theme.title));
		let inner = block.inner(frame.area());
		frame.render_widget(block, frame.area());

		let [list_area, detail_area, buttons_area, status_area] = Layout::vertical([
			Constraint::Min(3),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(inner);

		self.render_chooser(frame, list_area);
		self.render_details(frame, detail_area);
		self.render_buttons(frame, buttons_area);
		self.render_status(frame, status_area);
	}

	fn render_chooser(&mut self, frame: &mut Frame, area: Rect) {
		let items: Vec<ListItem> = self
			.chooser
			.rows()
			.map(|row| {
				ListItem::new(Line::from(vec![
					Span::styled(format!("[{}] ", row.icon_name()), self.theme.icon),
					Span::raw(row.label(&self.ui.placeholder_label).to_string()),
				]))
			})
			.collect();

		let border_style = if self.focus == Focus::Chooser {
			self.theme.title
		} else {
			self.theme.border
		};
		let list = List::new(items)
			.block(
				Block::default()
					.borders(Borders::BOTTOM)
					.border_style(border_style),
			)
			.highlight_style(self.theme.row_highlight)
			.highlight_symbol("> ");

		self.list_state.select(Some(self.chooser.active()));
		frame.render_stateful_widget(list, area, &mut self.list_state);
	}

	fn render_details(&self, frame: &mut Frame, area: Rect) {
		let lines = match self.chooser.selected_entry() {
			Some(entry) => {
				let types = if entry.mime_types.is_empty() {
					"(none)".to_string()
				} else {
					entry.mime_types.join(", ")
				};
				vec![
					Line::from(vec![
						Span::styled("Launcher: ", self.theme.muted),
						Span::raw(entry.path.display().to_string()),
					]),
					Line::from(vec![
						Span::styled("Icon: ", self.theme.muted),
						Span::raw(entry.icon_name().to_string()),
					]),
					Line::from(vec![
						Span::styled("Types: ", self.theme.muted),
						Span::raw(types),
					]),
				]
			}
			None => vec![Line::styled(
				format!(
					"{} application(s) available. Select one to create its shortcut.",
					self.chooser.applications().len()
				),
				self.theme.muted,
			)],
		};
		frame.render_widget(Paragraph::new(lines), area);
	}

	fn render_buttons(&self, frame: &mut Frame, area: Rect) {
		let button = |label: &str, focused: bool| {
			let style = if focused {
				self.theme.button_focused
			} else {
				self.theme.button
			};
			Span::styled(format!(" {label} "), style)
		};
		let line = Line::from(vec![
			button(&self.ui.create_label, self.focus == Focus::CreateButton),
			Span::raw("   "),
			button(&self.ui.quit_label, self.focus == Focus::QuitButton),
		]);
		frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let line = match &self.status {
			Some(status) => {
				let style = match status.level {
					StatusLevel::Info => self.theme.info,
					StatusLevel::Success => self.theme.success,
					StatusLevel::Error => self.theme.error,
				};
				Line::styled(status.message.clone(), style)
			}
			None => Line::styled(KEY_HINTS, self.theme.muted),
		};
		frame.render_widget(Paragraph::new(line), area);
	}
}
