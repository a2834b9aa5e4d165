use regex::Regex;
use thiserror::Error;

use super::entry::ApplicationEntry;

/// Errors raised while building [`FilterCriteria`].
#[derive(Debug, Error)]
pub enum FilterError {
	/// The filter term is not a valid regular expression.
	#[error("invalid filter pattern '{pattern}': {source}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	/// A requested MIME type is not of the form `category` or `category/subtype`.
	#[error("invalid MIME type '{0}'")]
	InvalidMimeType(String),
}

/// Rules restricting which applications the chooser lists.
///
/// Criteria are meant to be set once before the chooser is populated. The
/// regex pattern, if any, is compiled while building so that `populate` never
/// fails.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
	filter_term: String,
	use_regex: bool,
	pattern: Option<Regex>,
	mime_types: Vec<String>,
}

impl FilterCriteria {
	/// Criteria that keep every application.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build criteria from their individual settings.
	pub fn from_parts<I, S>(
		filter_term: impl Into<String>,
		use_regex: bool,
		mime_types: I,
	) -> Result<Self, FilterError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new()
			.with_filter_term(filter_term)?
			.with_regex(use_regex)?
			.with_mime_types(mime_types)
	}

	/// Filter display names by `term`; substring match unless regex mode is on.
	pub fn with_filter_term(mut self, term: impl Into<String>) -> Result<Self, FilterError> {
		self.filter_term = term.into();
		self.recompile()?;
		Ok(self)
	}

	/// Toggle whether the filter term is treated as a regular expression.
	pub fn with_regex(mut self, use_regex: bool) -> Result<Self, FilterError> {
		self.use_regex = use_regex;
		self.recompile()?;
		Ok(self)
	}

	/// Restrict listed applications to those supporting one of `mime_types`.
	///
	/// Values may be full types (`image/png`) or categories (`image`). They are
	/// trimmed, empty values are dropped and duplicates collapse to their first
	/// occurrence.
	pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Result<Self, FilterError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut sanitized: Vec<String> = Vec::new();
		for mime in mime_types {
			let mime = mime.as_ref().trim();
			if mime.is_empty() {
				continue;
			}
			if mime.contains(char::is_whitespace) || mime.starts_with('/') || mime.ends_with('/') {
				return Err(FilterError::InvalidMimeType(mime.to_string()));
			}
			if !sanitized.iter().any(|existing| existing == mime) {
				sanitized.push(mime.to_string());
			}
		}
		self.mime_types = sanitized;
		Ok(self)
	}

	pub fn filter_term(&self) -> &str {
		&self.filter_term
	}

	pub fn use_regex(&self) -> bool {
		self.use_regex
	}

	pub fn mime_types(&self) -> &[String] {
		&self.mime_types
	}

	/// Whether `name` passes the display-name filter.
	pub fn matches_name(&self, name: &str) -> bool {
		if self.filter_term.is_empty() {
			return true;
		}
		match &self.pattern {
			Some(pattern) => pattern.is_match(name),
			None => name
				.to_lowercase()
				.contains(&self.filter_term.to_lowercase()),
		}
	}

	/// Whether `entry` supports at least one requested type or category.
	pub fn matches_mime(&self, entry: &ApplicationEntry) -> bool {
		self.mime_types.is_empty()
			|| self
				.mime_types
				.iter()
				.any(|requested| entry.supports(requested))
	}

	pub fn matches(&self, entry: &ApplicationEntry) -> bool {
		self.matches_name(&entry.name) && self.matches_mime(entry)
	}

	fn recompile(&mut self) -> Result<(), FilterError> {
		self.pattern = if self.use_regex && !self.filter_term.is_empty() {
			let pattern =
				Regex::new(&self.filter_term).map_err(|source| FilterError::InvalidPattern {
					pattern: self.filter_term.clone(),
					source,
				})?;
			Some(pattern)
		} else {
			None
		};
		Ok(())
	}
}
