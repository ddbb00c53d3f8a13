use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use tracing::debug;

use crate::BindError;
use crate::BindResult;
use crate::config::BindConfig;
use crate::special_words::SpecialWords;

/// Decides which directory names are skipped during traversal.
///
/// Names starting with `.` or `_` are always skipped. Anything matching one
/// of the configured glob patterns is skipped as well.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
	patterns: Vec<String>,
	set: GlobSet,
}

impl ExclusionRules {
	/// Reserved leading characters for hidden and private directories.
	pub const RESERVED_PREFIXES: [char; 2] = ['.', '_'];

	pub fn new(patterns: &[String]) -> BindResult<Self> {
		let mut builder = GlobSetBuilder::new();
		for pattern in patterns {
			let glob = Glob::new(pattern).map_err(|e| {
				BindError::InvalidExclude {
					pattern: pattern.clone(),
					reason: e.to_string(),
				}
			})?;
			builder.add(glob);
		}

		let set = builder.build().map_err(|e| {
			BindError::InvalidExclude {
				pattern: patterns.join(", "),
				reason: e.to_string(),
			}
		})?;

		Ok(Self {
			patterns: patterns.to_vec(),
			set,
		})
	}

	pub fn patterns(&self) -> &[String] {
		&self.patterns
	}

	/// Whether a directory with this name is never traversed or linked.
	pub fn is_excluded(&self, name: &str) -> bool {
		name.starts_with(Self::RESERVED_PREFIXES) || self.set.is_match(name)
	}
}

/// Everything needed to bind a project, resolved once from [`BindConfig`]
/// and passed explicitly to every operation.
#[derive(Debug, Clone)]
pub struct ProjectContext {
	/// Project root. Topic directories live directly beneath it.
	pub root: PathBuf,
	/// Ordered topic names.
	pub topics: Vec<String>,
	/// Absolute path of the generated document.
	pub output: PathBuf,
	/// Directory rendered before the table of contents.
	pub introduction: String,
	/// Per-directory documentation file name.
	pub document: String,
	/// Name linked from the auto-generation notice.
	pub script: String,
	/// Sort subdirectories by name instead of using filesystem order.
	pub sort: bool,
	pub exclusions: ExclusionRules,
	pub special_words: SpecialWords,
}

impl ProjectContext {
	/// Resolve a loaded config against `root`. Reads the topic list.
	pub fn from_config(root: &Path, config: &BindConfig) -> BindResult<Self> {
		let topics = config.topics.load(root)?;
		let exclusions = ExclusionRules::new(&config.exclude)?;
		let special_words = SpecialWords::new(&config.merged_special_words())?;

		debug!(
			topics = topics.len(),
			excludes = ?exclusions.patterns(),
			special_words = special_words.len(),
			"resolved project configuration"
		);

		Ok(Self {
			root: root.to_path_buf(),
			topics,
			output: root.join(&config.output),
			introduction: config.introduction.clone(),
			document: config.document.clone(),
			script: config.script.clone(),
			sort: config.sort,
			exclusions,
			special_words,
		})
	}

	/// Absolute path of a `/`-separated directory path relative to the root.
	pub fn directory(&self, rel_path: &str) -> PathBuf {
		rel_path
			.split('/')
			.fold(self.root.clone(), |path, segment| path.join(segment))
	}
}

/// Load the config discovered at `root` and resolve it into a
/// [`ProjectContext`].
pub fn load_project(root: &Path) -> BindResult<ProjectContext> {
	let config = BindConfig::load(root)?;
	ProjectContext::from_config(root, &config)
}
