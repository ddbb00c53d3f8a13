use std::path::Path;
use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Bind per-directory README files into a single root document.",
	long_about = "mdbind walks the topic directories listed in topics.json and concatenates \
	              their README files into one root document.\n\nRelative links are rewritten \
	              to resolve from the project root, heading levels are shifted by nesting \
	              depth, and a table of contents is generated.\n\nQuick start:\n  mdbind init   \
	              Create a sample topic list\n  mdbind        Build the root document\n  mdbind \
	              check  Verify the root document is up to date\n  mdbind list   Show the \
	              section outline"
)]
pub struct MdbindCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Increase log verbosity. Repeat for more detail (`-vv` for debug).
	#[arg(long, short, global = true, action = ArgAction::Count)]
	pub verbose: u8,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Build the root document. This is the default when no subcommand is
	/// given.
	///
	/// Truncates the output file, then writes the introduction, the
	/// generated notice, the table of contents, and every topic in the
	/// configured order.
	Build {
		/// Watch topic directories and rebuild whenever a file changes.
		#[arg(long, default_value_t = false)]
		watch: bool,
	},
	/// Check that the root document is up to date.
	///
	/// Renders the document in memory and compares it with the output file.
	/// Exits with status 1 when they differ. Ideal for CI pipelines.
	Check {
		/// Show a line diff between the current and expected document.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// List the sections that make up the root document.
	///
	/// Prints the introduction and each topic with its nested directories
	/// and generated anchors, and warns about anchors shared by more than one
	/// heading.
	List {
		/// Output format for the section outline.
		#[arg(long, value_enum, default_value_t = ListFormat::Text)]
		format: ListFormat,
	},
	/// Create a sample `topics.json` and introduction directory.
	///
	/// Existing files are left untouched.
	Init,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
	/// Human-readable tree.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}

/// Whether a filesystem event seen in watch mode should start a rebuild.
///
/// Only creations, modifications and removals count. Events that touch
/// nothing but the output file are ignored since the build itself writes it.
pub fn triggers_rebuild(event: &notify::Event, output: &Path) -> bool {
	let relevant = matches!(
		event.kind,
		notify::EventKind::Modify(_) | notify::EventKind::Create(_) | notify::EventKind::Remove(_)
	);
	let only_output = !event.paths.is_empty() && event.paths.iter().all(|path| path == output);

	relevant && !only_output
}

/// Filter directives for the log subscriber.
///
/// A non-empty `RUST_LOG` is used as given. Otherwise the `--verbose` count
/// picks the level: warn, info, debug, then trace.
pub fn log_directives(verbosity: u8, rust_log: Option<&str>) -> String {
	if let Some(directives) = rust_log.filter(|value| !value.trim().is_empty()) {
		return directives.to_string();
	}

	let level = match verbosity {
		0 => tracing::Level::WARN,
		1 => tracing::Level::INFO,
		2 => tracing::Level::DEBUG,
		_ => tracing::Level::TRACE,
	};

	level.as_str().to_lowercase()
}
