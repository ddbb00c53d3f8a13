mod common;

use mdbind_core::AnyEmptyResult;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::mdbind_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created topic list"))
		.stdout(predicates::str::contains("Created introduction"));

	let topics = std::fs::read_to_string(tmp.path().join("topics.json"))?;
	assert_eq!(topics, "[\"Introduction\"]\n");
	assert!(tmp.path().join("Introduction/README.md").is_file());

	// A freshly initialized project builds straight away.
	common::mdbind_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(content.contains("* [Introduction](#introduction)"));

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "topics.json", r#"["Basics"]"#);
	common::write_file(tmp.path(), "Introduction/README.md", "existing intro\n");

	common::mdbind_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	let topics = std::fs::read_to_string(tmp.path().join("topics.json"))?;
	assert_eq!(topics, r#"["Basics"]"#);
	let intro = std::fs::read_to_string(tmp.path().join("Introduction/README.md"))?;
	assert_eq!(intro, "existing intro\n");

	Ok(())
}
