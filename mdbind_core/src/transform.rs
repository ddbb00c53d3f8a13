use crate::headings::shift_headings;
use crate::links::rewrite_links;
use crate::project::ProjectContext;

/// Prepare one directory's documentation for inclusion in the bound document.
///
/// Links are rewritten first, then headings are shifted by `depth`, and
/// special words are substituted last.
pub fn transform_content(
	project: &ProjectContext,
	content: &str,
	owner_path: &str,
	depth: usize,
) -> String {
	let content = rewrite_links(content, owner_path, &project.document);
	let content = shift_headings(&content, depth);
	project.special_words.apply(&content)
}
