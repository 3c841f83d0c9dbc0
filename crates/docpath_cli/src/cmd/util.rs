use std::path::Path;

use docpath::doc::{FixtureRow, Value};
use serde::Serialize;

use crate::error::{CliError, Result};

/// Read and decode a JSON document into a value tree.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
	Ok(Value::from_json(load_json(path)?))
}

/// Read fixture rows: one JSON object, or an array of objects.
pub(crate) fn load_rows(path: &Path) -> Result<Vec<FixtureRow>> {
	let invalid = |reason: String| CliError::InvalidFixture {
		path: path.to_owned(),
		reason,
	};

	match load_json(path)? {
		serde_json::Value::Object(object) => Ok(vec![FixtureRow::from_json_object(&object)]),
		serde_json::Value::Array(items) => items
			.iter()
			.enumerate()
			.map(|(idx, item)| {
				item.as_object()
					.map(FixtureRow::from_json_object)
					.ok_or_else(|| invalid(format!("row {idx} is not an object")))
			})
			.collect(),
		other => Err(invalid(format!("expected object or array, got {}", json_kind(&other)))),
	}
}

/// Keep only the `--row` selection when one was given.
pub(crate) fn select_rows(rows: Vec<FixtureRow>, row: Option<usize>) -> Result<Vec<FixtureRow>> {
	let Some(row) = row else {
		return Ok(rows);
	};

	let total = rows.len();
	rows.into_iter()
		.nth(row)
		.map(|selected| vec![selected])
		.ok_or(CliError::RowOutOfRange { row, rows: total })
}

/// Print a pretty JSON payload to stdout.
pub(crate) fn emit_json<T: Serialize + ?Sized>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

fn load_json(path: &Path) -> Result<serde_json::Value> {
	let bytes = std::fs::read(path).map_err(|source| CliError::Read {
		path: path.to_owned(),
		source,
	})?;
	serde_json::from_slice(&bytes).map_err(|source| CliError::Json {
		path: path.to_owned(),
		source,
	})
}

fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "bool",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;
