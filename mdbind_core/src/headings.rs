use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^(#+) (.*)").expect("valid regex"));

/// Push every markdown heading down by `depth + 1` levels.
///
/// Headings are found line-anchored, but each distinct heading is replaced
/// as a literal string across the whole document in the order first seen.
/// Identical headings therefore change together, exactly once.
pub fn shift_headings(content: &str, depth: usize) -> String {
	let mut seen = HashSet::new();
	let headings: Vec<(usize, String)> = HEADING_RE
		.captures_iter(content)
		.map(|caps| (caps[1].len(), caps[2].to_string()))
		.filter(|heading| seen.insert(heading.clone()))
		.collect();

	let mut result = content.to_string();
	for (level, text) in headings {
		let current = format!("{} {text}", "#".repeat(level));
		let shifted = format!("{} {text}", "#".repeat(level + depth + 1));
		result = result.replace(&current, &shifted);
	}

	result
}
