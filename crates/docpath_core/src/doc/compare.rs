use serde::Serialize;

use crate::doc::{Absent, DocPathError, Probe, Value, coerce};

/// Result of checking one path against its expected text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
	/// Whether actual and expected are structurally equal.
	pub matched: bool,
	/// Value found at the path; `None` when the path is absent or unreadable.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub actual: Option<Value>,
	/// Coerced expected value.
	pub expected: Value,
	/// Human-readable explanation.
	pub detail: String,
}

impl ValidationOutcome {
	/// Outcome for a path that could not be checked at all.
	pub fn error(expected_raw: &str, err: &DocPathError) -> Self {
		Self {
			matched: false,
			actual: None,
			expected: coerce(expected_raw),
			detail: err.to_string(),
		}
	}
}

/// Compare a read result with expected raw text coerced by [`coerce`].
pub fn compare(actual: Option<&Value>, expected_raw: &str) -> ValidationOutcome {
	let expected = coerce(expected_raw);
	match actual {
		Some(actual) => matched_or_not(actual, expected),
		None => ValidationOutcome {
			matched: false,
			actual: None,
			expected,
			detail: "path not found".to_owned(),
		},
	}
}

/// Like [`compare`], with the absence location spelled out in `detail`.
pub fn compare_probe(probe: &Probe<'_>, expected_raw: &str) -> ValidationOutcome {
	match probe {
		Probe::Found(actual) => compare(Some(*actual), expected_raw),
		Probe::Absent(absent) => absent_outcome(absent, coerce(expected_raw)),
	}
}

fn matched_or_not(actual: &Value, expected: Value) -> ValidationOutcome {
	let matched = *actual == expected;
	let detail = if matched {
		"ok".to_owned()
	} else {
		format!("expected {expected} ({}), got {actual} ({})", expected.kind(), actual.kind())
	};

	ValidationOutcome {
		matched,
		actual: Some(actual.clone()),
		expected,
		detail,
	}
}

fn absent_outcome(absent: &Absent, expected: Value) -> ValidationOutcome {
	ValidationOutcome {
		matched: false,
		actual: None,
		expected,
		detail: format!("path not found: {absent}"),
	}
}

#[cfg(test)]
mod tests;
