use anyhow::Result;
use ratatui::{
	Terminal,
	backend::Backend,
	crossterm::event::{self, Event, KeyEventKind},
};

use super::ShortcutWindow;

/// Take over the terminal and run `window` until the user quits.
pub fn run(window: &mut ShortcutWindow) -> Result<()> {
	let mut terminal = ratatui::init();
	let result = event_loop(&mut terminal, window);
	ratatui::restore();
	result
}

/// Draw, wait for the next input event, dispatch it; repeat until terminated.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, window: &mut ShortcutWindow) -> Result<()> {
	terminal.clear()?;
	while !window.is_terminated() {
		terminal.draw(|frame| window.draw(frame))?;
		match event::read()? {
			Event::Key(key) if key.kind == KeyEventKind::Press => window.handle_key(key),
			_ => {}
		}
	}
	Ok(())
}
