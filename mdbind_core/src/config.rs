use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::BindError;
use crate::BindResult;
use crate::special_words::default_special_words;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["mdbind.toml", ".mdbind.toml", ".config/mdbind.toml"];

/// Default location of the ordered topic list.
pub const DEFAULT_TOPICS_FILE: &str = "topics.json";

/// Default path of the generated document, relative to the project root.
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

/// Default name of the per-directory documentation file.
pub const DEFAULT_DOCUMENT_NAME: &str = "README.md";

/// Directory whose content opens the generated document without a heading.
pub const DEFAULT_INTRODUCTION: &str = "Introduction";

/// Name linked from the auto-generation notice.
pub const DEFAULT_SCRIPT: &str = "build.py";

/// Directory names that are never traversed or linked.
pub const DEFAULT_EXCLUDED: [&str; 1] = ["Tools"];

/// Where the ordered list of topics comes from.
///
/// A plain string points at a JSON file holding an array of topic names:
///
/// ```toml
/// topics = "topics.json"
/// ```
///
/// An array lists the topics inline:
///
/// ```toml
/// topics = ["Introduction", "Basics", "Algorithms"]
/// ```
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
#[non_exhaustive]
pub enum TopicSource {
	Path(PathBuf),
	Inline(Vec<String>),
}

impl Default for TopicSource {
	fn default() -> Self {
		Self::Path(PathBuf::from(DEFAULT_TOPICS_FILE))
	}
}

impl TopicSource {
	/// Resolve the ordered topic names, reading the JSON list from disk for
	/// file-backed sources.
	pub fn load(&self, root: &Path) -> BindResult<Vec<String>> {
		match self {
			Self::Inline(topics) => Ok(topics.clone()),
			Self::Path(rel_path) => {
				let display = rel_path.display().to_string();
				let content = match std::fs::read_to_string(root.join(rel_path)) {
					Ok(content) => content,
					Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
						return Err(BindError::MissingTopics { path: display });
					}
					Err(e) => return Err(e.into()),
				};

				parse_topics(&content, &display)
			}
		}
	}
}

/// Parse a JSON array of topic names.
pub fn parse_topics(content: &str, path: &str) -> BindResult<Vec<String>> {
	serde_json::from_str::<Vec<String>>(content).map_err(|e| {
		BindError::TopicsParse {
			path: path.to_string(),
			reason: e.to_string(),
		}
	})
}

/// Configuration loaded from an `mdbind.toml` file.
///
/// Every key is optional. A project without a config file behaves as if it
/// had this one:
///
/// ```toml
/// topics = "topics.json"
/// output = "README.md"
/// introduction = "Introduction"
/// document = "README.md"
/// exclude = ["Tools"]
/// sort = false
/// script = "build.py"
///
/// [special_words]
/// ":heart:" = "<span style=\"color:red\">❤️</span>"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BindConfig {
	/// Ordered topic names, either inline or as a path to a JSON list.
	pub topics: TopicSource,
	/// Path of the generated document relative to the project root.
	pub output: PathBuf,
	/// Directory rendered before the table of contents, without a heading.
	pub introduction: String,
	/// Name of the documentation file looked up in each directory.
	pub document: String,
	/// Glob patterns matched against directory names to skip. Names starting
	/// with `.` or `_` are always skipped regardless of this list.
	pub exclude: Vec<String>,
	/// Sort subdirectories by name instead of using the filesystem order.
	pub sort: bool,
	/// Name linked from the auto-generation notice.
	pub script: String,
	/// Extra literal tokens and the markup that replaces them. Entries here
	/// override the built-in ones with the same token.
	pub special_words: BTreeMap<String, String>,
}

impl Default for BindConfig {
	fn default() -> Self {
		Self {
			topics: TopicSource::default(),
			output: PathBuf::from(DEFAULT_OUTPUT_FILE),
			introduction: DEFAULT_INTRODUCTION.to_string(),
			document: DEFAULT_DOCUMENT_NAME.to_string(),
			exclude: DEFAULT_EXCLUDED.iter().map(ToString::to_string).collect(),
			sort: false,
			script: DEFAULT_SCRIPT.to_string(),
			special_words: BTreeMap::new(),
		}
	}
}

impl BindConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Falls back to the defaults when no config file exists.
	pub fn load(root: &Path) -> BindResult<BindConfig> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(BindConfig::default());
		};

		let content = std::fs::read_to_string(&config_path)?;
		Self::parse(&content)
	}

	/// Parse config from TOML text.
	pub fn parse(content: &str) -> BindResult<BindConfig> {
		toml::from_str(content).map_err(|e| BindError::ConfigParse(e.to_string()))
	}

	/// The built-in special words merged with the configured ones.
	pub fn merged_special_words(&self) -> BTreeMap<String, String> {
		let mut words = default_special_words();
		words.extend(
			self.special_words
				.iter()
				.map(|(token, markup)| (token.clone(), markup.clone())),
		);
		words
	}
}
