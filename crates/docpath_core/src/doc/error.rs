use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DocPathError>;

/// Errors produced while parsing paths and writing into value trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocPathError {
	/// Path expression syntax is invalid.
	#[error("invalid path {path:?}: {reason}")]
	PathSyntax {
		/// Original path string.
		path: String,
		/// Short description of the offending construct.
		reason: String,
	},
	/// Existing node has the wrong shape for the requested write.
	#[error("path conflict at {path:?}: {node:?} holds {found}, expected {expected} (step {step})")]
	PathConflict {
		/// Original path string.
		path: String,
		/// Zero-based index of the step that could not be entered.
		step: usize,
		/// Canonical path of the offending node; empty for the root.
		node: String,
		/// Container kind the write needed.
		expected: &'static str,
		/// Kind actually present in the tree.
		found: &'static str,
	},
	/// Sequence index is too large to pad up to.
	#[error("index {index} in {path:?} (step {step}) exceeds the write limit of {limit}")]
	IndexLimit {
		/// Original path string.
		path: String,
		/// Zero-based index of the indexed step.
		step: usize,
		/// Requested sequence index.
		index: usize,
		/// Largest index a write may create.
		limit: usize,
	},
}

impl DocPathError {
	pub(crate) fn syntax(path: &str, reason: impl Into<String>) -> Self {
		Self::PathSyntax {
			path: path.to_owned(),
			reason: reason.into(),
		}
	}

	/// Return the path string this error refers to.
	pub fn path(&self) -> &str {
		match self {
			Self::PathSyntax { path, .. } | Self::PathConflict { path, .. } | Self::IndexLimit { path, .. } => path,
		}
	}
}
