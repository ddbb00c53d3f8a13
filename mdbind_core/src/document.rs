use std::path::PathBuf;

use tracing::info;
use tracing::instrument;

use crate::BindResult;
use crate::anchor::anchor_for;
use crate::project::ProjectContext;
use crate::sink::FileSink;
use crate::sink::OutputSink;
use crate::walker::WalkStats;
use crate::walker::Walker;

/// Summary of a completed build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
	/// Where the document was written.
	pub output: PathBuf,
	/// Number of topics rendered after the table of contents.
	pub topics: usize,
	/// Bytes written.
	pub bytes: usize,
	pub stats: WalkStats,
}

/// Result of comparing the output file with a fresh render.
#[derive(Debug)]
pub struct CheckResult {
	/// Path of the output file that was compared.
	pub output: PathBuf,
	/// Current file content, or `None` when the file does not exist yet.
	pub current: Option<String>,
	/// Content a build would produce now.
	pub expected: String,
}

impl CheckResult {
	/// Returns true when the output file matches a fresh build.
	pub fn is_ok(&self) -> bool {
		self.current.as_deref() == Some(self.expected.as_str())
	}
}

/// The notice placed between the introduction and the table of contents.
pub fn generated_notice(project: &ProjectContext) -> String {
	let script = &project.script;
	format!(
		"\nThis file is auto generated using [{script}]({script}). To update it, update the {} \
		 files in the subdirectories and run the {script} script.\n",
		project.document
	)
}

/// The table of contents heading and one bullet per topic.
pub fn table_of_contents(topics: &[String]) -> String {
	let mut toc = String::from("\n# Table of Contents\n");
	for topic in topics {
		toc.push_str(&format!("* [{topic}](#{})\n", anchor_for(topic)));
	}
	toc
}

/// Stream the whole document into `sink`.
///
/// Order: introduction content (without a heading), the generated notice,
/// the table of contents, then each topic under a top-level heading.
#[instrument(skip_all, fields(topics = project.topics.len()))]
pub fn build_document<S: OutputSink>(project: &ProjectContext, sink: &mut S) -> BindResult<WalkStats> {
	let mut walker = Walker::new(project, sink);

	walker.walk(&project.introduction, 0)?;
	walker.sink().append(&generated_notice(project))?;
	walker.sink().append(&table_of_contents(&project.topics))?;

	for topic in &project.topics {
		walker
			.sink()
			.append(&format!("\n<br><br>\n\n# {topic}\n\n"))?;
		walker.walk(topic, 0)?;
	}

	Ok(walker.stats())
}

/// Render the document in memory.
pub fn render(project: &ProjectContext) -> BindResult<String> {
	let mut output = String::new();
	build_document(project, &mut output)?;
	Ok(output)
}

/// Truncate the output file and write the document into it.
///
/// A failure part-way through leaves the partially written file behind.
pub fn write_output(project: &ProjectContext) -> BindResult<BuildSummary> {
	let mut sink = FileSink::create(&project.output)?;
	let stats = build_document(project, &mut sink)?;

	info!(
		output = %project.output.display(),
		directories = stats.directories,
		documents = stats.documents,
		"bound documentation"
	);

	Ok(BuildSummary {
		output: sink.path().to_path_buf(),
		topics: project.topics.len(),
		bytes: sink.written(),
		stats,
	})
}

/// Compare the output file on disk with what a build would produce.
pub fn check_output(project: &ProjectContext) -> BindResult<CheckResult> {
	let expected = render(project)?;
	let current = match std::fs::read_to_string(&project.output) {
		Ok(content) => Some(content),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
		Err(e) => return Err(e.into()),
	};

	Ok(CheckResult {
		output: project.output.clone(),
		current,
		expected,
	})
}
