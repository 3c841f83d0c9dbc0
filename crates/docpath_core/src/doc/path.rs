use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;

use crate::doc::{DocPathError, Result};

/// One parsed segment of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
	/// Select a named map entry.
	Field(String),
	/// Select a named map entry holding a sequence, then its zero-based element.
	IndexedField(String, usize),
}

impl PathStep {
	/// Field name addressed by this step.
	pub fn name(&self) -> &str {
		match self {
			Self::Field(name) | Self::IndexedField(name, _) => name,
		}
	}
}

impl fmt::Display for PathStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(name) => f.write_str(name),
			Self::IndexedField(name, index) => write!(f, "{name}[{index}]"),
		}
	}
}

/// Parsed path expression such as `applicants[0].firstName`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
	steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted field syntax with an optional `[index]` suffix per step.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(DocPathError::syntax(input, "empty path"));
		}

		let mut steps = Vec::new();
		let mut rest = input;

		loop {
			let name_end = rest.find(['.', '[', ']']).unwrap_or(rest.len());
			let name = &rest[..name_end];
			if name.is_empty() {
				return Err(DocPathError::syntax(input, format!("empty step name at step {}", steps.len())));
			}
			rest = &rest[name_end..];

			let step = if let Some(after_open) = rest.strip_prefix('[') {
				let close = after_open.find(']').ok_or_else(|| DocPathError::syntax(input, "unclosed '['"))?;
				let index = parse_index(input, &after_open[..close])?;
				rest = &after_open[close + 1..];
				PathStep::IndexedField(name.to_owned(), index)
			} else {
				PathStep::Field(name.to_owned())
			};
			steps.push(step);

			if rest.is_empty() {
				break;
			}

			rest = match rest.strip_prefix('.') {
				Some(next) => next,
				None if rest.starts_with('[') => return Err(DocPathError::syntax(input, "only one index is allowed per step")),
				None if rest.starts_with(']') => return Err(DocPathError::syntax(input, "unmatched ']'")),
				None => return Err(DocPathError::syntax(input, "expected '.' after index")),
			};
		}

		Ok(Self { steps })
	}

	/// Ordered steps of this path.
	pub fn steps(&self) -> &[PathStep] {
		&self.steps
	}

	/// Number of steps.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Always false for parsed paths.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}
}

fn parse_index(input: &str, digits: &str) -> Result<usize> {
	if digits.is_empty() {
		return Err(DocPathError::syntax(input, "empty index"));
	}
	if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(DocPathError::syntax(input, format!("index {digits:?} is not a non-negative integer")));
	}
	digits
		.parse::<usize>()
		.map_err(|_| DocPathError::syntax(input, format!("index {digits} is out of range")))
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, step) in self.steps.iter().enumerate() {
			if idx > 0 {
				f.write_str(".")?;
			}
			write!(f, "{step}")?;
		}
		Ok(())
	}
}

impl FromStr for FieldPath {
	type Err = DocPathError;

	fn from_str(input: &str) -> Result<Self> {
		Self::parse(input)
	}
}

/// Memo of parsed paths keyed by their raw text.
///
/// Fixture tables repeat the same column paths on every row; failed parses are not cached.
#[derive(Debug, Default)]
pub struct PathCache {
	parsed: HashMap<String, FieldPath>,
}

impl PathCache {
	/// Create an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Return the cached parse of `input`, parsing it on first use.
	pub fn get_or_parse(&mut self, input: &str) -> Result<&FieldPath> {
		match self.parsed.entry(input.to_owned()) {
			Entry::Occupied(entry) => Ok(entry.into_mut()),
			Entry::Vacant(entry) => {
				let path = FieldPath::parse(input)?;
				Ok(entry.insert(path))
			}
		}
	}

	/// Number of distinct paths cached.
	pub fn len(&self) -> usize {
		self.parsed.len()
	}

	/// Whether nothing has been cached yet.
	pub fn is_empty(&self) -> bool {
		self.parsed.is_empty()
	}
}
