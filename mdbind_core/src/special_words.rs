use std::collections::BTreeMap;

use regex::NoExpand;
use regex::Regex;

use crate::BindError;
use crate::BindResult;

/// Token replaced by a red heart.
pub const HEART_TOKEN: &str = ":heart:";

/// Markup inserted for [`HEART_TOKEN`].
pub const HEART_MARKUP: &str = "<span style=\"color:red\">❤️</span>";

/// The built-in token table.
pub fn default_special_words() -> BTreeMap<String, String> {
	BTreeMap::from([(HEART_TOKEN.to_string(), HEART_MARKUP.to_string())])
}

/// Literal tokens compiled for substitution, applied in token order.
#[derive(Debug, Clone)]
pub struct SpecialWords {
	entries: Vec<SpecialWord>,
}

#[derive(Debug, Clone)]
struct SpecialWord {
	pattern: Regex,
	markup: String,
}

impl SpecialWords {
	/// Compile a token table. Tokens are matched literally and
	/// case-sensitively.
	pub fn new(words: &BTreeMap<String, String>) -> BindResult<Self> {
		let entries = words
			.iter()
			.map(|(token, markup)| {
				let pattern = Regex::new(&regex::escape(token))
					.map_err(|e| BindError::Pattern(e.to_string()))?;
				Ok(SpecialWord {
					pattern,
					markup: markup.clone(),
				})
			})
			.collect::<BindResult<Vec<_>>>()?;

		Ok(Self { entries })
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Replace every occurrence of every token with its markup.
	pub fn apply(&self, content: &str) -> String {
		let mut result = content.to_string();
		for word in &self.entries {
			result = word
				.pattern
				.replace_all(&result, NoExpand(&word.markup))
				.into_owned();
		}
		result
	}
}
