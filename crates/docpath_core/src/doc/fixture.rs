use indexmap::IndexMap;
use serde::Serialize;

use crate::doc::{PathCache, Result, ValidationOutcome, Value, coerce, compare_probe, is_blank, probe_path, write_path};

/// Path prefix reserving an entry for response validation.
pub const RESPONSE_PREFIX: &str = "response.";

/// One path→raw-text cell from a fixture table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
	/// Path expression, possibly carrying the response prefix.
	pub path: String,
	/// Raw cell text.
	pub raw: String,
}

impl FlatEntry {
	/// Create an entry from path and raw text.
	pub fn new(path: impl Into<String>, raw: impl Into<String>) -> Self {
		Self { path: path.into(), raw: raw.into() }
	}
}

/// Ordered fixture row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureRow {
	entries: Vec<FlatEntry>,
}

impl FixtureRow {
	/// Create an empty row.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one cell.
	pub fn push(&mut self, entry: FlatEntry) {
		self.entries.push(entry);
	}

	/// Cells in insertion order.
	pub fn entries(&self) -> &[FlatEntry] {
		&self.entries
	}

	/// Number of cells.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the row has no cells.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Build a row from a decoded JSON object.
	///
	/// Strings are taken verbatim, other scalars use their JSON text, `null` is blank,
	/// and nested containers are kept as compact JSON text.
	pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
		object
			.iter()
			.map(|(path, cell)| {
				let raw = match cell {
					serde_json::Value::Null => String::new(),
					serde_json::Value::String(text) => text.clone(),
					serde_json::Value::Bool(_) | serde_json::Value::Number(_) | serde_json::Value::Array(_) | serde_json::Value::Object(_) => cell.to_string(),
				};
				FlatEntry::new(path.clone(), raw)
			})
			.collect()
	}
}

impl FromIterator<FlatEntry> for FixtureRow {
	fn from_iter<I: IntoIterator<Item = FlatEntry>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<P: Into<String>, R: Into<String>> FromIterator<(P, R)> for FixtureRow {
	fn from_iter<I: IntoIterator<Item = (P, R)>>(iter: I) -> Self {
		iter.into_iter().map(|(path, raw)| FlatEntry::new(path, raw)).collect()
	}
}

/// Population behavior.
#[derive(Debug, Clone)]
pub struct PopulateOptions {
	/// Entries whose path starts with this prefix are left for validation.
	pub response_prefix: String,
	/// Skip cells whose raw text is blank.
	pub skip_blank: bool,
}

impl Default for PopulateOptions {
	fn default() -> Self {
		Self {
			response_prefix: RESPONSE_PREFIX.to_owned(),
			skip_blank: true,
		}
	}
}

/// Validation behavior.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
	/// Only entries with this prefix are validated; it is stripped before parsing.
	pub response_prefix: String,
	/// Skip cells whose expected text is blank.
	pub skip_blank: bool,
}

impl Default for ValidateOptions {
	fn default() -> Self {
		Self {
			response_prefix: RESPONSE_PREFIX.to_owned(),
			skip_blank: true,
		}
	}
}

/// Fill a copy of `template` from one fixture row.
///
/// The template itself is never modified. The first malformed or conflicting
/// path aborts the whole row.
pub fn populate(template: &Value, row: &FixtureRow, options: &PopulateOptions) -> Result<Value> {
	populate_cached(template, row, options, &mut PathCache::new())
}

/// Fill one copy of `template` per row, sharing parsed paths between rows.
pub fn populate_rows(template: &Value, rows: &[FixtureRow], options: &PopulateOptions) -> Result<Vec<Value>> {
	let mut cache = PathCache::new();
	rows.iter().map(|row| populate_cached(template, row, options, &mut cache)).collect()
}

fn populate_cached(template: &Value, row: &FixtureRow, options: &PopulateOptions, cache: &mut PathCache) -> Result<Value> {
	let mut document = template.clone();
	let mut written = 0_usize;

	for entry in row.entries() {
		if entry.path.starts_with(options.response_prefix.as_str()) {
			log::debug!("populate: skip response entry {}", entry.path);
			continue;
		}
		if options.skip_blank && is_blank(&entry.raw) {
			log::debug!("populate: skip blank entry {}", entry.path);
			continue;
		}

		let path = cache.get_or_parse(&entry.path)?;
		let value = coerce(&entry.raw);
		log::debug!("populate: {} = {value} ({})", entry.path, value.kind());
		write_path(&mut document, path, value)?;
		written += 1;
	}

	log::debug!("populate: wrote {written} of {} entries", row.len());
	Ok(document)
}

/// Check every response-prefixed cell of `row` against `response`.
///
/// Always yields one outcome per checked path; malformed paths become failing
/// outcomes instead of errors.
pub fn validate(response: &Value, row: &FixtureRow, options: &ValidateOptions) -> ValidationReport {
	let mut cache = PathCache::new();
	let mut report = ValidationReport::default();

	for entry in row.entries() {
		let Some(stripped) = entry.path.strip_prefix(options.response_prefix.as_str()) else {
			continue;
		};
		if options.skip_blank && is_blank(&entry.raw) {
			log::debug!("validate: skip blank expectation {}", entry.path);
			continue;
		}

		let outcome = match cache.get_or_parse(stripped) {
			Ok(path) => compare_probe(&probe_path(response, path), &entry.raw),
			Err(err) => ValidationOutcome::error(&entry.raw, &err),
		};
		if !outcome.matched {
			log::warn!("validation failed for {}: {}", entry.path, outcome.detail);
		}
		report.outcomes.insert(entry.path.clone(), outcome);
	}

	log::info!("validation: {}/{} passed", report.passed_count(), report.len());
	report
}

/// Ordered outcomes keyed by the original, prefixed path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
	outcomes: IndexMap<String, ValidationOutcome>,
}

impl ValidationReport {
	/// Whether every outcome matched. An empty report passes.
	pub fn all_passed(&self) -> bool {
		self.outcomes.values().all(|outcome| outcome.matched)
	}

	/// Outcome for one original path.
	pub fn get(&self, path: &str) -> Option<&ValidationOutcome> {
		self.outcomes.get(path)
	}

	/// Outcomes in request order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationOutcome)> {
		self.outcomes.iter().map(|(path, outcome)| (path.as_str(), outcome))
	}

	/// Non-matching outcomes in request order.
	pub fn failures(&self) -> impl Iterator<Item = (&str, &ValidationOutcome)> {
		self.iter().filter(|(_, outcome)| !outcome.matched)
	}

	/// Number of matching outcomes.
	pub fn passed_count(&self) -> usize {
		self.outcomes.values().filter(|outcome| outcome.matched).count()
	}

	/// Number of outcomes.
	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	/// Whether no path was checked.
	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}

	/// Log one `PASS`/`FAIL` line per outcome at info level.
	pub fn log_results(&self) {
		for (path, outcome) in self.iter() {
			let actual = outcome.actual.as_ref().map_or_else(|| "<absent>".to_owned(), Value::to_string);
			log::info!(
				"{path}: {} | expected: {} | actual: {actual} | {}",
				if outcome.matched { "PASS" } else { "FAIL" },
				outcome.expected,
				outcome.detail
			);
		}
	}
}

#[cfg(test)]
mod tests;
