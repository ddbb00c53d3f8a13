use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use mdbind_cli::Commands;
use mdbind_cli::ListFormat;
use mdbind_cli::MdbindCli;
use mdbind_cli::log_directives;
use mdbind_cli::triggers_rebuild;
use mdbind_core::AnyEmptyResult;
use mdbind_core::BindError;
use mdbind_core::ProjectContext;
use mdbind_core::check_output;
use mdbind_core::config::DEFAULT_DOCUMENT_NAME;
use mdbind_core::config::DEFAULT_INTRODUCTION;
use mdbind_core::config::DEFAULT_TOPICS_FILE;
use mdbind_core::load_project;
use mdbind_core::sections::Section;
use mdbind_core::sections::scan_outline;
use mdbind_core::write_output;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,dimmed) => {
		if color_enabled() {
			format!("{}", $text.dimmed())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdbindCli::parse();

	// Respect NO_COLOR, --no-color, and terminals without color support.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	setup_logging(args.verbose, use_color);

	let result = match args.command {
		None => run_build(&args, false),
		Some(Commands::Build { watch }) => run_build(&args, watch),
		Some(Commands::Check { diff }) => run_check(&args, diff),
		Some(Commands::List { format }) => run_list(&args, format),
		Some(Commands::Init) => run_init(&args),
	};

	if let Err(e) = result {
		match e.downcast::<BindError>() {
			Ok(bind_err) => {
				let report: miette::Report = (*bind_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn setup_logging(verbosity: u8, use_color: bool) {
	use tracing_subscriber::layer::SubscriberExt;
	use tracing_subscriber::util::SubscriberInitExt;

	let rust_log = std::env::var("RUST_LOG").ok();
	let filter = tracing_subscriber::EnvFilter::new(log_directives(verbosity, rust_log.as_deref()));

	let fmt_layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false);

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt_layer)
		.init();
}

fn resolve_root(args: &MdbindCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

fn run_build(args: &MdbindCli, watch: bool) -> AnyEmptyResult {
	let root = resolve_root(args);

	if !watch {
		let project = load_project(&root)?;
		return build_once(&project);
	}

	let root = std::fs::canonicalize(&root)?;
	let project = load_project(&root)?;
	build_once(&project)?;

	println!("\nWatching for file changes... (press Ctrl+C to stop)");

	let output = project.output.clone();
	let (tx, rx) = mpsc::channel();
	let mut watcher =
		notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
			if let Ok(event) = res {
				if triggers_rebuild(&event, &output) {
					let _ = tx.send(());
				}
			}
		})?;

	use notify::Watcher;
	watcher.watch(&root, notify::RecursiveMode::Recursive)?;

	loop {
		rx.recv()?;
		// Debounce: drain additional events within 200ms.
		while rx.recv_timeout(Duration::from_millis(200)).is_ok() {}

		println!("\nFile change detected, rebuilding...");
		if let Err(e) = rebuild(&root) {
			eprintln!("{} {e}", colored!("error:", red));
		}
	}
}

/// Reload config and topics before building since either may have changed.
fn rebuild(root: &Path) -> AnyEmptyResult {
	let project = load_project(root)?;
	build_once(&project)
}

fn build_once(project: &ProjectContext) -> AnyEmptyResult {
	let summary = write_output(project)?;
	println!(
		"{} {} ({} document(s) from {} director{}, {} topic(s))",
		colored!("Built", green),
		make_relative(&summary.output, &project.root),
		summary.stats.documents,
		summary.stats.directories,
		if summary.stats.directories == 1 { "y" } else { "ies" },
		summary.topics,
	);
	Ok(())
}

fn run_check(args: &MdbindCli, show_diff: bool) -> AnyEmptyResult {
	let root = resolve_root(args);
	let project = load_project(&root)?;
	let result = check_output(&project)?;
	let rel = make_relative(&result.output, &root);

	if result.is_ok() {
		println!("Check passed: {rel} is up to date.");
		return Ok(());
	}

	match &result.current {
		None => {
			eprintln!("{} {rel} does not exist.", colored!("stale:", red));
		}
		Some(current) => {
			eprintln!("{} {rel} is out of date.", colored!("stale:", red));
			if show_diff {
				print_diff(current, &result.expected);
			}
		}
	}
	eprintln!("\nRun `mdbind` to rebuild it.");
	process::exit(1);
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

fn run_list(args: &MdbindCli, format: ListFormat) -> AnyEmptyResult {
	let root = resolve_root(args);
	let project = load_project(&root)?;
	let outline = scan_outline(&project)?;
	let collisions = outline.anchor_collisions();

	match format {
		ListFormat::Json => {
			let value = serde_json::json!({
				"introduction": outline.introduction,
				"topics": outline.topics,
				"collisions": collisions,
			});
			println!("{}", serde_json::to_string_pretty(&value)?);
		}
		ListFormat::Text => {
			println!("{}", colored!("Introduction:", bold));
			print_section(&outline.introduction, 1);

			println!();
			println!("{}", colored!("Topics:", bold));
			for topic in &outline.topics {
				print_section(topic, 1);
			}

			for collision in &collisions {
				eprintln!(
					"{} anchor `#{}` is shared by {}",
					colored!("warning:", yellow),
					collision.anchor,
					collision.paths.join(", ")
				);
			}
		}
	}

	Ok(())
}

fn print_section(section: &Section, indent: usize) {
	let marker = if section.has_document { "" } else { " (no document)" };
	println!(
		"{}{} {}{}",
		"  ".repeat(indent),
		section.name,
		colored!(format!("#{}", section.anchor), dimmed),
		marker
	);
	for child in &section.children {
		print_section(child, indent + 1);
	}
}

fn run_init(args: &MdbindCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	let topics_path = root.join(DEFAULT_TOPICS_FILE);
	let introduction_path = root.join(DEFAULT_INTRODUCTION).join(DEFAULT_DOCUMENT_NAME);

	if topics_path.exists() {
		println!("Topic list already exists: {}", topics_path.display());
	} else {
		std::fs::write(&topics_path, format!("[\"{DEFAULT_INTRODUCTION}\"]\n"))?;
		println!("Created topic list: {}", topics_path.display());
	}

	if introduction_path.exists() {
		println!("Introduction already exists: {}", introduction_path.display());
	} else {
		std::fs::create_dir_all(root.join(DEFAULT_INTRODUCTION))?;
		std::fs::write(
			&introduction_path,
			"# Introduction\n\nWrite an overview of this collection here.\n",
		)?;
		println!("Created introduction: {}", introduction_path.display());
	}

	println!();
	println!("Next steps:");
	println!("  1. Add a directory with a README.md for each topic");
	println!("  2. List the topic names in order in {DEFAULT_TOPICS_FILE}");
	println!("  3. Run `mdbind` to build the root document");

	Ok(())
}
