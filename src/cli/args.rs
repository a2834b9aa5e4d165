use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};
use deskcut::app_dirs;

/// Produce the full version banner including config and log directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let log_dir = match app_dirs::get_log_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("deskcut {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "log directory: {log_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "deskcut",
	version,
	long_version = long_version(),
	about = "Pick an installed application and copy its launcher onto the desktop",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `deskcut` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DESKCUT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long = "filter",
		value_name = "TERM",
		help = "Only list applications whose name contains TERM (default: none)"
	)]
	pub(crate) filter: Option<String>,
	#[arg(
		short = 'r',
		long = "regex",
		help = "Treat the filter term as a regular expression (default: disabled)"
	)]
	pub(crate) regex: bool,
	#[arg(
		short = 'm',
		long = "mime",
		value_delimiter = ',',
		value_name = "TYPE",
		action = ArgAction::Append,
		help = "Only list applications handling a MIME type or category (default: application)"
	)]
	pub(crate) mime_types: Option<Vec<String>>,
	#[arg(
		long = "any-type",
		conflicts_with = "mime_types",
		help = "List applications regardless of the MIME types they handle (default: disabled)"
	)]
	pub(crate) any_type: bool,
	#[arg(
		long = "show-hidden",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "List entries marked NoDisplay (default: enabled)"
	)]
	pub(crate) show_hidden: Option<bool>,
	#[arg(
		long = "desktop-dir",
		value_name = "DIR",
		help = "Directory shortcuts are copied to first (default: XDG desktop directory)"
	)]
	pub(crate) desktop_dir: Option<PathBuf>,
	#[arg(
		long = "fallback-dir",
		value_name = "DIR",
		help = "Directory tried when the first copy fails (default: ~/Desktop)"
	)]
	pub(crate) fallback_dir: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		env = "DESKCUT_LOG_LEVEL",
		help = "Log filter, e.g. info or deskcut=debug (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list",
		help = "Print the filtered application list and exit (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how --list prints applications")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by `--list`.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
