use std::fs;
use std::path::Path;

use deskcut::apps::PLACEHOLDER_LABEL;
use deskcut::ui::WindowState;
use deskcut::{AppChooser, DesktopRegistry, Destinations, FilterCriteria, ShortcutOutcome, ShortcutWindow};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

fn write_launcher(dir: &Path, id: &str, name: &str, mime: &str) {
	fs::write(
		dir.join(format!("{id}.desktop")),
		format!("[Desktop Entry]\nType=Application\nName={name}\nExec={id}\nMimeType={mime}\n"),
	)
	.unwrap();
}

fn key(window: &mut ShortcutWindow, code: KeyCode) {
	window.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn desktop_entries_are_filtered_sorted_and_copied() {
	let home = TempDir::new().unwrap();
	let apps = home.path().join(".local/share/applications");
	fs::create_dir_all(&apps).unwrap();
	write_launcher(&apps, "org.example.Foo", "Foo Tool", "application/x-foo;");
	write_launcher(&apps, "org.example.Archiver", "Archiver", "application/zip;application/x-tar;");
	write_launcher(&apps, "org.example.Notes", "Notes", "text/plain;");

	let registry = DesktopRegistry::with_search_paths([apps.as_path()]);
	let mut chooser = AppChooser::new(FilterCriteria::new().with_mime_types(["application"]).unwrap());
	assert_eq!(chooser.populate(&registry), 2);

	let labels: Vec<&str> = chooser.rows().map(|row| row.label(PLACEHOLDER_LABEL)).collect();
	assert_eq!(labels, vec![PLACEHOLDER_LABEL, "Archiver", "Foo Tool"]);

	let destinations = Destinations::under_home(home.path());
	fs::create_dir(&destinations.fallback).unwrap();
	let mut window = ShortcutWindow::new(chooser, destinations.clone());

	key(&mut window, KeyCode::Down);
	key(&mut window, KeyCode::Down);
	assert_eq!(window.state(), WindowState::Selected);
	key(&mut window, KeyCode::Enter);

	let copied = destinations.fallback.join("org.example.Foo.desktop");
	assert_eq!(
		window.last_outcome().and_then(ShortcutOutcome::created_path),
		Some(copied.as_path())
	);
	assert!(fs::read_to_string(&copied).unwrap().contains("Name=Foo Tool"));

	key(&mut window, KeyCode::Char('q'));
	assert_eq!(window.state(), WindowState::Terminated);
}

#[test]
fn regex_filter_over_desktop_entries() {
	let dir = TempDir::new().unwrap();
	write_launcher(dir.path(), "firefox", "Firefox", "text/html;");
	write_launcher(dir.path(), "files", "Files", "inode/directory;");
	write_launcher(dir.path(), "fireplace", "fireplace", "text/plain;");

	let criteria = FilterCriteria::from_parts("^Fi", true, Vec::<String>::new()).unwrap();
	let mut chooser = AppChooser::new(criteria);
	chooser.populate(&DesktopRegistry::with_search_paths([dir.path()]));

	let names: Vec<&str> = chooser.applications().iter().map(|entry| entry.name.as_str()).collect();
	assert_eq!(names, vec!["Files", "Firefox"]);
}
