use std::path::Path;

use tempfile::TempDir;

use crate::BindConfig;
use crate::ProjectContext;
use crate::TopicSource;

pub(crate) fn write_file(root: &Path, rel_path: &str, content: &str) {
	let path = root.join(rel_path);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create_dir_all: {e}"));
	}
	std::fs::write(&path, content).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
}

pub(crate) fn make_dir(root: &Path, rel_path: &str) {
	std::fs::create_dir_all(root.join(rel_path)).unwrap_or_else(|e| panic!("create_dir_all: {e}"));
}

/// Config with inline topics and sorted traversal so output is deterministic.
pub(crate) fn sorted_config(introduction: &str, topics: &[&str]) -> BindConfig {
	BindConfig {
		topics: TopicSource::Inline(topics.iter().map(ToString::to_string).collect()),
		introduction: introduction.to_string(),
		sort: true,
		..BindConfig::default()
	}
}

pub(crate) fn project(root: &Path, introduction: &str, topics: &[&str]) -> ProjectContext {
	ProjectContext::from_config(root, &sorted_config(introduction, topics))
		.unwrap_or_else(|e| panic!("project: {e}"))
}

/// Two topics, each with one subdirectory holding a single `# Title`
/// document.
pub(crate) fn two_topic_tree() -> TempDir {
	let tmp = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
	write_file(tmp.path(), "Intro/README.md", "Welcome to the notes.\n");
	write_file(tmp.path(), "Intro/Start/README.md", "# Title\n");
	write_file(tmp.path(), "Basics/README.md", "Basics overview.\n");
	write_file(tmp.path(), "Basics/Loops/README.md", "# Title\n");
	tmp
}
