//! `mdbind_core` is the core library for `mdbind`, a tool that binds the
//! `README.md` files spread across a directory tree into one root document.
//! Relative links and heading levels are rewritten so the combined document
//! stays internally consistent.
//!
//! ## Processing Pipeline
//!
//! ```text
//! mdbind.toml + topics.json
//!   → Config (ordered topics, exclusions, special words)
//!   → Walker (visits topic directories depth-first, emits section links and headings)
//!   → Transformer (rewrites links, shifts headings, substitutes special words)
//!   → Sink (append-only output, truncated at the start of each build)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Loading `mdbind.toml` and the topic list.
//! - [`links`]: Extracting link targets and rewriting them relative to the
//!   output root.
//! - [`headings`]: Shifting heading levels by nesting depth.
//! - [`special_words`]: Literal token substitution such as `:heart:`.
//! - [`walker`]: Depth-first traversal of topic directories.
//! - [`sections`]: A read-only outline of the project tree.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdbind_core::check_output;
//! use mdbind_core::load_project;
//! use mdbind_core::write_output;
//! use std::path::Path;
//!
//! let project = load_project(Path::new(".")).unwrap();
//!
//! if !check_output(&project).unwrap().is_ok() {
//!     let summary = write_output(&project).unwrap();
//!     println!("wrote {}", summary.output.display());
//! }
//! ```

pub use anchor::*;
pub use config::BindConfig;
pub use config::TopicSource;
pub use document::*;
pub use error::*;
pub use project::*;
pub use sink::*;
pub use transform::*;

mod anchor;
pub mod config;
mod document;
#[allow(unused_assignments)]
mod error;
pub mod headings;
pub mod links;
mod project;
pub mod sections;
mod sink;
pub mod special_words;
mod transform;
pub mod walker;

#[cfg(test)]
mod __fixtures;
