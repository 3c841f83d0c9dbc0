mod coerce;
mod compare;
mod error;
mod fixture;
mod navigate;
mod path;
mod value;

/// Raw text to typed scalar conversion.
pub use coerce::{coerce, is_blank};
/// Expected-versus-actual comparison.
pub use compare::{ValidationOutcome, compare, compare_probe};
/// Error and result aliases.
pub use error::{DocPathError, Result};
/// Fixture rows and the population/validation entry points.
pub use fixture::{FixtureRow, FlatEntry, PopulateOptions, RESPONSE_PREFIX, ValidateOptions, ValidationReport, populate, populate_rows, validate};
/// Path reads and auto-vivifying writes.
pub use navigate::{Absent, AbsentReason, MAX_WRITE_INDEX, Probe, probe_path, read_path, write_path};
/// Path expression parser types.
pub use path::{FieldPath, PathCache, PathStep};
/// Document value tree.
pub use value::{Value, ValueMap};
