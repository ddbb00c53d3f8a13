use std::path::Path;

use tracing::debug;
use tracing::warn;

use crate::BindError;
use crate::BindResult;
use crate::anchor::anchor_for;
use crate::project::ProjectContext;
use crate::sink::OutputSink;
use crate::transform::transform_content;

/// Counters collected while walking topic directories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
	/// Directories visited, including topic roots.
	pub directories: usize,
	/// Documentation files found and appended.
	pub documents: usize,
}

/// List the subdirectories of `dir` that take part in the document.
///
/// Hidden, private and excluded names are dropped. The order is whatever the
/// filesystem returns unless the project asks for sorted output.
pub fn child_directories(project: &ProjectContext, dir: &Path) -> BindResult<Vec<String>> {
	let mut children = Vec::new();

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		if !entry.path().is_dir() {
			continue;
		}

		let name = match entry.file_name().into_string() {
			Ok(name) => name,
			Err(raw) => {
				warn!(name = ?raw, parent = %dir.display(), "skipping non-UTF-8 directory name");
				continue;
			}
		};

		if project.exclusions.is_excluded(&name) {
			debug!(name = %name, parent = %dir.display(), "skipping excluded directory");
			continue;
		}

		children.push(name);
	}

	if project.sort {
		children.sort();
	}

	Ok(children)
}

/// Depth-first writer of topic directories into an [`OutputSink`].
pub struct Walker<'a, S: OutputSink> {
	project: &'a ProjectContext,
	sink: &'a mut S,
	stats: WalkStats,
}

impl<'a, S: OutputSink> Walker<'a, S> {
	pub fn new(project: &'a ProjectContext, sink: &'a mut S) -> Self {
		Self {
			project,
			sink,
			stats: WalkStats::default(),
		}
	}

	pub fn stats(&self) -> WalkStats {
		self.stats
	}

	/// Direct access to the sink for content emitted between walks.
	pub fn sink(&mut self) -> &mut S {
		&mut *self.sink
	}

	/// Write the directory at `rel_path` and everything below it.
	///
	/// Emits one link per child, the transformed documentation file if
	/// present, then a heading and the recursive output for each child. The
	/// caller is responsible for the heading of `rel_path` itself.
	pub fn walk(&mut self, rel_path: &str, depth: usize) -> BindResult<()> {
		let dir = self.project.directory(rel_path);
		if !dir.is_dir() {
			return Err(BindError::MissingDirectory {
				path: rel_path.to_string(),
			});
		}

		let children = child_directories(self.project, &dir)?;
		self.stats.directories += 1;
		debug!(path = rel_path, depth, children = children.len(), "visiting directory");

		for child in &children {
			self.sink
				.append(&format!("⇨ [{child}](#{})<br>", anchor_for(child)))?;
		}
		self.sink.append("\n\n")?;

		let document = dir.join(&self.project.document);
		if document.is_file() {
			let content = std::fs::read_to_string(&document)?;
			let transformed = transform_content(self.project, &content, rel_path, depth);
			self.sink.append(&transformed)?;
			self.stats.documents += 1;
			debug!(path = %document.display(), "appended documentation");
		}

		for child in &children {
			self.sink
				.append(&format!("\n\n##{} {child}\n\n", "#".repeat(depth)))?;
			self.walk(&format!("{rel_path}/{child}"), depth + 1)?;
			self.sink.append("\n\n")?;
		}

		Ok(())
	}
}
