mod common;

use mdbind_core::AnyEmptyResult;

#[test]
fn build_writes_root_document() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path());

	common::mdbind_cmd()
		.arg("build")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Built README.md"));

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(content.starts_with("\n\n## Notes\n"));
	assert!(content.contains("<span style=\"color:red\">❤️</span>"));
	assert!(content.contains("# Table of Contents\n* [Introduction](#introduction)\n"));
	assert!(content.contains("* [Data Structures](#data-structures)\n"));
	assert!(content.contains("\n<br><br>\n\n# Data Structures\n\n"));
	assert!(content.contains("⇨ [Linked Lists](#linked-lists)<br>⇨ [Trees](#trees)<br>"));
	assert!(content.contains("![overview](Data%20Structures/overview.png)"));
	assert!(content.contains("\n\n## Linked Lists\n\n"));
	assert!(content.contains("#### Operations"));
	assert!(content.contains("See [Trees](#trees)."));
	assert!(!content.contains("internal tooling"));

	Ok(())
}

#[test]
fn build_is_the_default_command() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path());

	common::mdbind_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(tmp.path().join("README.md").is_file());

	Ok(())
}

#[test]
fn build_overwrites_previous_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path());
	common::write_file(tmp.path(), "README.md", "hand edited\n");

	common::mdbind_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(!content.contains("hand edited"));

	Ok(())
}

#[test]
fn build_fails_without_topic_list() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::mdbind_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("topic list not found"));

	assert!(!tmp.path().join("README.md").exists());

	Ok(())
}

#[test]
fn build_fails_on_malformed_topic_list() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "topics.json", "{not json");

	common::mdbind_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse topic list"));

	Ok(())
}

#[test]
fn build_fails_on_missing_topic_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path());
	common::write_file(
		tmp.path(),
		"topics.json",
		r#"["Introduction", "Data Structures", "Graphs"]"#,
	);

	common::mdbind_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("topic directory not found"));

	Ok(())
}

#[test]
fn build_honors_output_setting() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path());
	common::write_file(tmp.path(), "mdbind.toml", "sort = true\noutput = \"BOOK.md\"\n");

	common::mdbind_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Built BOOK.md"));

	assert!(tmp.path().join("BOOK.md").is_file());
	assert!(!tmp.path().join("README.md").exists());

	Ok(())
}
