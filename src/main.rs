mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use deskcut::apps::{AppChooser, DesktopRegistry};
use deskcut::logging;
use deskcut::ui::ShortcutWindow;
use settings::ResolvedConfig;
use tracing::{debug, info};

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	let log_guard = match logging::initialize(&resolved.log_level) {
		Ok(guard) => Some(guard),
		Err(err) => {
			eprintln!("deskcut: logging disabled: {err:#}");
			None
		}
	};

	if cli.print_config {
		resolved.print_summary(log_guard.as_ref().map(|guard| guard.log_file()));
	}

	let chooser = populate_chooser(&resolved);

	if cli.list {
		return match cli.output {
			OutputFormat::Plain => {
				print_plain(&chooser);
				Ok(())
			}
			OutputFormat::Json => print_json(&chooser),
		};
	}

	run_window(chooser, resolved)
}

/// Build the application list from the desktop entries on this system.
fn populate_chooser(settings: &ResolvedConfig) -> AppChooser {
	let registry = DesktopRegistry::from_env().include_hidden(settings.include_hidden);
	debug!(paths = ?registry.search_paths(), "scanning application directories");
	let mut chooser = AppChooser::new(settings.criteria.clone());
	let kept = chooser.populate(&registry);
	info!(kept, "application list ready");
	chooser
}

fn run_window(chooser: AppChooser, settings: ResolvedConfig) -> Result<()> {
	let mut window = ShortcutWindow::new(chooser, settings.destinations).with_ui_config(settings.ui);
	deskcut::ui::run(&mut window)
}
