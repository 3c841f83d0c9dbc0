use std::path::PathBuf;

use docpath::doc::DocPathError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `docpath` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Path parsing or population failure from the core engine.
	#[error(transparent)]
	Doc(#[from] DocPathError),
	/// Input file could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		/// File that failed to open or read.
		path: PathBuf,
		/// Underlying IO error.
		source: std::io::Error,
	},
	/// Input file is not valid JSON.
	#[error("invalid json in {}: {source}", .path.display())]
	Json {
		/// Offending file.
		path: PathBuf,
		/// Decoder error.
		source: serde_json::Error,
	},
	/// Rows file has the wrong shape.
	#[error("invalid fixture rows in {}: {reason}", .path.display())]
	InvalidFixture {
		/// Offending file.
		path: PathBuf,
		/// Shape problem description.
		reason: String,
	},
	/// `--row` selected a row that does not exist.
	#[error("row {row} out of range ({rows} rows)")]
	RowOutOfRange {
		/// Requested zero-based row.
		row: usize,
		/// Rows available.
		rows: usize,
	},
	/// Output encoding failed.
	#[error("failed to encode output: {0}")]
	Encode(#[from] serde_json::Error),
	/// At least one validation outcome did not match.
	#[error("validation failed: {failed} of {total} checks did not match")]
	ValidationFailed {
		/// Non-matching outcomes.
		failed: usize,
		/// Outcomes checked.
		total: usize,
	},
}
