#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

pub fn mdbind_cmd() -> Command {
	let mut cmd = Command::cargo_bin("mdbind").unwrap_or_else(|e| panic!("cargo_bin: {e}"));
	cmd.env("NO_COLOR", "1");
	cmd
}

pub fn write_file(root: &Path, rel_path: &str, content: &str) {
	let path = root.join(rel_path);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create_dir_all: {e}"));
	}
	std::fs::write(&path, content).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
}

/// A small project: an introduction and two topics, with sorted traversal.
pub fn sample_project(root: &Path) {
	write_file(root, "mdbind.toml", "sort = true\n");
	write_file(root, "topics.json", r#"["Introduction", "Data Structures"]"#);
	write_file(
		root,
		"Introduction/README.md",
		"# Notes\n\nPersonal notes, made with :heart:.\n",
	);
	write_file(
		root,
		"Data Structures/README.md",
		"Containers and how they work.\n\n![overview](./overview.png)\n",
	);
	write_file(
		root,
		"Data Structures/Linked Lists/README.md",
		"## Operations\n\nSee [Trees](../Trees/README.md).\n",
	);
	write_file(root, "Data Structures/Trees/README.md", "## Traversal\n");
	write_file(root, "Data Structures/Tools/README.md", "internal tooling\n");
}
