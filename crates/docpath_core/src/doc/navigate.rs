use std::fmt;

use crate::doc::{DocPathError, FieldPath, PathStep, Result, Value, ValueMap};

/// Why a read stopped before reaching the end of its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsentReason {
	/// Current map has no entry with this key.
	MissingKey {
		/// Requested key.
		key: String,
	},
	/// Current node is not a map.
	ExpectedMap {
		/// Kind actually found.
		found: &'static str,
	},
	/// Named entry exists but is not a sequence.
	ExpectedSequence {
		/// Kind actually found.
		found: &'static str,
	},
	/// Sequence is shorter than the requested index.
	IndexOutOfBounds {
		/// Requested index.
		index: usize,
		/// Sequence length.
		len: usize,
	},
}

impl fmt::Display for AbsentReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingKey { key } => write!(f, "missing key {key:?}"),
			Self::ExpectedMap { found } => write!(f, "expected map, found {found}"),
			Self::ExpectedSequence { found } => write!(f, "expected sequence, found {found}"),
			Self::IndexOutOfBounds { index, len } => write!(f, "index {index} out of bounds (len {len})"),
		}
	}
}

/// Location and cause of an absent read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Absent {
	/// Zero-based step index where navigation stopped.
	pub step_index: usize,
	/// Stop cause.
	pub reason: AbsentReason,
}

impl fmt::Display for Absent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} at step {}", self.reason, self.step_index)
	}
}

/// Outcome of walking a path without mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe<'a> {
	/// Path resolved to a node.
	Found(&'a Value),
	/// Path does not resolve.
	Absent(Absent),
}

impl<'a> Probe<'a> {
	/// Resolved node, if any.
	pub fn found(&self) -> Option<&'a Value> {
		match self {
			Self::Found(value) => Some(value),
			Self::Absent(_) => None,
		}
	}
}

/// Walk `path` over `root`, reporting where and why a missing path stopped.
pub fn probe_path<'a>(root: &'a Value, path: &FieldPath) -> Probe<'a> {
	let mut current = root;

	for (step_index, step) in path.steps().iter().enumerate() {
		let absent = |reason| Probe::Absent(Absent { step_index, reason });

		let entry = match current {
			Value::Map(map) => match map.get(step.name()) {
				Some(entry) => entry,
				None => return absent(AbsentReason::MissingKey { key: step.name().to_owned() }),
			},
			other @ (Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_) | Value::Sequence(_)) => {
				return absent(AbsentReason::ExpectedMap { found: other.kind() });
			}
		};

		current = match step {
			PathStep::Field(_) => entry,
			PathStep::IndexedField(_, index) => match entry {
				Value::Sequence(items) => match items.get(*index) {
					Some(item) => item,
					None => {
						return absent(AbsentReason::IndexOutOfBounds {
							index: *index,
							len: items.len(),
						});
					}
				},
				other @ (Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_) | Value::Map(_)) => {
					return absent(AbsentReason::ExpectedSequence { found: other.kind() });
				}
			},
		};
	}

	Probe::Found(current)
}

/// Read the node at `path`, or `None` when it does not resolve.
pub fn read_path<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
	probe_path(root, path).found()
}

/// Largest sequence index a write may pad up to.
///
/// Reads are not limited; they never allocate.
pub const MAX_WRITE_INDEX: usize = 65_535;

/// Write `value` at `path`, creating missing maps and sequences on the way.
///
/// `Null` nodes in container position are replaced like missing ones. Any other
/// non-container node in the way is a [`DocPathError::PathConflict`]. Indices
/// above [`MAX_WRITE_INDEX`] fail with [`DocPathError::IndexLimit`].
pub fn write_path(root: &mut Value, path: &FieldPath, value: Value) -> Result<()> {
	let Some((last, parents)) = path.steps().split_last() else {
		return Err(DocPathError::syntax("", "empty path"));
	};

	let mut current = root;
	for (step_index, step) in parents.iter().enumerate() {
		let map = map_mut(current, path, step_index)?;
		current = match step {
			PathStep::Field(name) => map.entry(name.clone()).or_insert_with(Value::empty_map),
			PathStep::IndexedField(name, index) => {
				let items = sequence_mut(map, name, path, step_index)?;
				slot_mut(items, *index, path, step_index)?
			}
		};
	}

	let last_index = parents.len();
	let map = map_mut(current, path, last_index)?;
	match last {
		PathStep::Field(name) => {
			map.insert(name.clone(), value);
		}
		PathStep::IndexedField(name, index) => {
			let items = sequence_mut(map, name, path, last_index)?;
			*slot_mut(items, *index, path, last_index)? = value;
		}
	}

	Ok(())
}

fn map_mut<'a>(node: &'a mut Value, path: &FieldPath, step: usize) -> Result<&'a mut ValueMap> {
	if node.is_null() {
		*node = Value::empty_map();
	}

	match node {
		Value::Map(map) => Ok(map),
		other @ (Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_) | Value::Sequence(_)) => {
			Err(conflict(path, step, node_path(path, step, None), "map", other.kind()))
		}
	}
}

fn sequence_mut<'a>(map: &'a mut ValueMap, name: &str, path: &FieldPath, step: usize) -> Result<&'a mut Vec<Value>> {
	let node = map.entry(name.to_owned()).or_insert_with(Value::empty_sequence);
	if node.is_null() {
		*node = Value::empty_sequence();
	}

	match node {
		Value::Sequence(items) => Ok(items),
		other @ (Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_) | Value::Map(_)) => {
			Err(conflict(path, step, node_path(path, step, Some(name)), "sequence", other.kind()))
		}
	}
}

/// Pad with empty maps so `index` exists, then hand out that slot.
fn slot_mut<'a>(items: &'a mut Vec<Value>, index: usize, path: &FieldPath, step: usize) -> Result<&'a mut Value> {
	if index > MAX_WRITE_INDEX {
		log::debug!("write in {path} at step {step}: index {index} exceeds {MAX_WRITE_INDEX}");
		return Err(DocPathError::IndexLimit {
			path: path.to_string(),
			step,
			index,
			limit: MAX_WRITE_INDEX,
		});
	}
	if items.len() <= index {
		items.resize_with(index + 1, Value::empty_map);
	}
	Ok(&mut items[index])
}

/// Canonical path of the node the write stopped on: the steps before `step`,
/// plus the entry `name` when a sequence was expected under it.
fn node_path(path: &FieldPath, step: usize, name: Option<&str>) -> String {
	let mut parts: Vec<String> = path.steps()[..step].iter().map(PathStep::to_string).collect();
	parts.extend(name.map(str::to_owned));
	parts.join(".")
}

fn conflict(path: &FieldPath, step: usize, node: String, expected: &'static str, found: &'static str) -> DocPathError {
	log::debug!("write conflict in {path} at step {step}: {node:?} is {found}, expected {expected}");
	DocPathError::PathConflict {
		path: path.to_string(),
		step,
		node,
		expected,
		found,
	}
}
