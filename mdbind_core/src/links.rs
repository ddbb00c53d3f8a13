use std::sync::LazyLock;

use regex::Regex;

use crate::anchor::anchor_for_link_segment;

static MARKDOWN_LINK_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^\)]+)\)").expect("valid regex"));

static SRC_ATTRIBUTE_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"(src)="([^"]+)""#).expect("valid regex"));

/// A link found in a document: the display text and the raw target.
///
/// For `src="..."` attributes the text is the literal `src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
	pub text: String,
	pub target: String,
}

/// How a link target is treated when a document moves to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
	/// Points at another directory's documentation file.
	Document,
	/// Starts with `./`.
	SameDirectory,
	/// Starts with `../`.
	Parent,
	/// Anything else, including absolute and external links.
	Other,
}

/// Extract every `[text](target)` link followed by every `src="target"`
/// attribute, each group in document order.
pub fn extract_links(content: &str) -> Vec<LinkRecord> {
	MARKDOWN_LINK_RE
		.captures_iter(content)
		.chain(SRC_ATTRIBUTE_RE.captures_iter(content))
		.map(|caps| {
			LinkRecord {
				text: caps[1].to_string(),
				target: caps[2].to_string(),
			}
		})
		.collect()
}

/// Classify a link target. Any target containing `http` is never treated as
/// a documentation link.
pub fn classify(target: &str, document_name: &str) -> LinkKind {
	if target.ends_with(document_name) && !target.contains("http") {
		LinkKind::Document
	} else if target.starts_with("./") {
		LinkKind::SameDirectory
	} else if target.starts_with("../") {
		LinkKind::Parent
	} else {
		LinkKind::Other
	}
}

/// Compute the root-relative replacement for a single target, or `None` when
/// it stays as written.
///
/// `owner_path` is the `/`-separated path of the directory owning the
/// document, relative to the output root.
pub fn rewrite_target(target: &str, owner_path: &str, document_name: &str) -> Option<String> {
	match classify(target, document_name) {
		LinkKind::Document => {
			if !target.contains('/') {
				return None;
			}
			let directory = target.rsplit('/').nth(1).unwrap_or_default();
			Some(format!("#{}", anchor_for_link_segment(directory)))
		}
		LinkKind::SameDirectory => {
			let prefix = format!("{}/", encode_spaces(owner_path));
			Some(target.replace("./", &prefix))
		}
		LinkKind::Parent => Some(target.replace("../", &parent_prefix(owner_path))),
		LinkKind::Other => None,
	}
}

/// The prefix substituted for `../`: the owner path without its last
/// segment, followed by `/`.
///
/// When the owner has no separator (a top-level topic) the prefix is a bare
/// `/`, so `../img.png` under `Basics` becomes `/img.png`.
pub fn parent_prefix(owner_path: &str) -> String {
	let parent = if owner_path.starts_with('/') {
		""
	} else {
		owner_path
			.rfind('/')
			.map_or("", |index| &owner_path[..index])
	};

	encode_spaces(&format!("{parent}/"))
}

/// Rewrite relative link targets so they resolve from the output root.
///
/// Each rewrite replaces every literal occurrence of the original target in
/// the whole document, so identical strings outside the link change too.
pub fn rewrite_links(content: &str, owner_path: &str, document_name: &str) -> String {
	let mut result = content.to_string();

	for link in extract_links(content) {
		if let Some(rewritten) = rewrite_target(&link.target, owner_path, document_name) {
			result = result.replace(&link.target, &rewritten);
		}
	}

	result
}

fn encode_spaces(path: &str) -> String {
	path.replace(' ', "%20")
}
