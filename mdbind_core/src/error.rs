use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum BindError {
	#[error(transparent)]
	#[diagnostic(code(mdbind::io_error))]
	Io(#[from] std::io::Error),

	#[error("topic list not found: `{path}`")]
	#[diagnostic(
		code(mdbind::missing_topics),
		help("create `{path}` containing a JSON array of topic names, or run `mdbind init`")
	)]
	MissingTopics { path: String },

	#[error("failed to parse topic list `{path}`: {reason}")]
	#[diagnostic(
		code(mdbind::topics_parse),
		help("the topic list must be a JSON array of strings, e.g. `[\"Introduction\", \"Basics\"]`")
	)]
	TopicsParse { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdbind::config_parse),
		help("check that mdbind.toml is valid TOML")
	)]
	ConfigParse(String),

	#[error("topic directory not found: `{path}`")]
	#[diagnostic(
		code(mdbind::missing_directory),
		help("every configured topic needs a directory of the same name under the project root")
	)]
	MissingDirectory { path: String },

	#[error("invalid exclude pattern `{pattern}`: {reason}")]
	#[diagnostic(code(mdbind::invalid_exclude))]
	InvalidExclude { pattern: String, reason: String },

	#[error("failed to compile special word pattern: {0}")]
	#[diagnostic(code(mdbind::pattern))]
	Pattern(String),
}

pub type BindResult<T> = Result<T, BindError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
