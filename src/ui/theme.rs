use ratatui::style::{Color, Modifier, Style};

/// Styles used when drawing the shortcut window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub border: Style,
	pub title: Style,
	pub row_highlight: Style,
	pub icon: Style,
	pub muted: Style,
	pub button: Style,
	pub button_focused: Style,
	pub info: Style,
	pub success: Style,
	pub error: Style,
}

pub const SLATE: Theme = Theme {
	border: Style::new().fg(Color::Rgb(100, 116, 139)),
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(250, 204, 21)),
	icon: Style::new().fg(Color::Rgb(100, 116, 139)),
	muted: Style::new().fg(Color::Rgb(148, 163, 184)),
	button: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	button_focused: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(56, 189, 248))
		.add_modifier(Modifier::BOLD),
	info: Style::new().fg(Color::Rgb(148, 163, 184)),
	success: Style::new().fg(Color::Rgb(74, 222, 128)),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
};

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}
