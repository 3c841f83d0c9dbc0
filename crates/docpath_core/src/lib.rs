//! Public library API for reading and writing nested documents through flat dot/bracket paths.

/// Value tree, path parsing, navigation, coercion, and fixture population/validation.
pub mod doc;
