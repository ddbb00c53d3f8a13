use std::collections::BTreeMap;

use serde::Serialize;

use crate::BindError;
use crate::BindResult;
use crate::anchor::anchor_for;
use crate::project::ProjectContext;
use crate::walker::child_directories;

/// A directory as it appears in the bound document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Section {
	/// Directory name, used as the heading text.
	pub name: String,
	/// `/`-separated path relative to the project root.
	pub path: String,
	/// Anchor generated from the name.
	pub anchor: String,
	/// Nesting depth. Topic roots are 0.
	pub depth: usize,
	/// Whether the directory has a documentation file.
	pub has_document: bool,
	pub children: Vec<Section>,
}

impl Section {
	/// Visit this section and every descendant depth-first.
	pub fn for_each(&self, visit: &mut impl FnMut(&Section)) {
		visit(self);
		for child in &self.children {
			child.for_each(visit);
		}
	}
}

/// The sections of a project: the introduction and each topic in order.
#[derive(Debug, Clone, Serialize)]
pub struct Outline {
	pub introduction: Section,
	pub topics: Vec<Section>,
}

/// Two or more headings that share an anchor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnchorCollision {
	pub anchor: String,
	pub paths: Vec<String>,
}

impl Outline {
	/// Every anchor shared by more than one heading.
	///
	/// The introduction itself is rendered without a heading, so only its
	/// descendants take part.
	pub fn anchor_collisions(&self) -> Vec<AnchorCollision> {
		let mut by_anchor: BTreeMap<String, Vec<String>> = BTreeMap::new();
		let mut record = |section: &Section| {
			by_anchor
				.entry(section.anchor.clone())
				.or_default()
				.push(section.path.clone());
		};

		for child in &self.introduction.children {
			child.for_each(&mut record);
		}
		for topic in &self.topics {
			topic.for_each(&mut record);
		}

		by_anchor
			.into_iter()
			.filter(|(_, paths)| paths.len() > 1)
			.map(|(anchor, paths)| {
				AnchorCollision {
					anchor,
					paths,
				}
			})
			.collect()
	}
}

/// Scan the project tree without transforming any content.
pub fn scan_outline(project: &ProjectContext) -> BindResult<Outline> {
	let introduction = scan_section(project, &project.introduction, &project.introduction, 0)?;
	let topics = project
		.topics
		.iter()
		.map(|topic| scan_section(project, topic, topic, 0))
		.collect::<BindResult<Vec<_>>>()?;

	Ok(Outline {
		introduction,
		topics,
	})
}

fn scan_section(
	project: &ProjectContext,
	name: &str,
	rel_path: &str,
	depth: usize,
) -> BindResult<Section> {
	let dir = project.directory(rel_path);
	if !dir.is_dir() {
		return Err(BindError::MissingDirectory {
			path: rel_path.to_string(),
		});
	}

	let children = child_directories(project, &dir)?
		.iter()
		.map(|child| scan_section(project, child, &format!("{rel_path}/{child}"), depth + 1))
		.collect::<BindResult<Vec<_>>>()?;

	Ok(Section {
		name: name.to_string(),
		path: rel_path.to_string(),
		anchor: anchor_for(name),
		depth,
		has_document: dir.join(&project.document).is_file(),
		children,
	})
}
