mod common;

use mdbind_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;

#[test]
fn list_prints_outline_with_anchors() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path());

	common::mdbind_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Data Structures #data-structures"))
		.stdout(predicates::str::contains("Linked Lists #linked-lists"))
		.stdout(predicates::str::contains("Tools").not());

	Ok(())
}

#[test]
fn list_json_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::sample_project(tmp.path());

	let output = common::mdbind_cmd()
		.arg("list")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.output()?;
	assert!(output.status.success());

	let value: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(value["introduction"]["anchor"], "introduction");
	assert_eq!(value["topics"][1]["name"], "Data Structures");
	assert_eq!(value["topics"][1]["children"][0]["path"], "Data Structures/Linked Lists");
	assert_eq!(value["collisions"].as_array().map(Vec::len), Some(0));

	Ok(())
}

#[test]
fn list_warns_about_shared_anchors() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "topics.json", r#"["Linux", "Windows"]"#);
	common::write_file(tmp.path(), "Introduction/README.md", "Hello\n");
	common::write_file(tmp.path(), "Linux/Setup/README.md", "apt\n");
	common::write_file(tmp.path(), "Windows/Setup/README.md", "winget\n");

	common::mdbind_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("anchor `#setup` is shared by"));

	Ok(())
}
