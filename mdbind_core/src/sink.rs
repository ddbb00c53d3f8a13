use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::BindResult;

/// Append-only destination for the generated document.
pub trait OutputSink {
	/// Append `content` to the end of the output.
	fn append(&mut self, content: &str) -> BindResult<()>;
}

impl OutputSink for String {
	fn append(&mut self, content: &str) -> BindResult<()> {
		self.push_str(content);
		Ok(())
	}
}

/// Writes to a file on disk. The file is truncated when the sink is created
/// and reopened in append mode for every write, so no handle outlives a
/// single call.
#[derive(Debug)]
pub struct FileSink {
	path: PathBuf,
	written: usize,
}

impl FileSink {
	/// Truncate (or create) the file at `path`.
	pub fn create(path: impl Into<PathBuf>) -> BindResult<Self> {
		let path = path.into();
		std::fs::write(&path, "")?;

		Ok(Self { path, written: 0 })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Number of bytes appended since the file was truncated.
	pub fn written(&self) -> usize {
		self.written
	}
}

impl OutputSink for FileSink {
	fn append(&mut self, content: &str) -> BindResult<()> {
		let mut file = OpenOptions::new().append(true).open(&self.path)?;
		file.write_all(content.as_bytes())?;
		self.written += content.len();
		Ok(())
	}
}
