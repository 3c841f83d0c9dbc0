use docpath::doc::FlatEntry;
use docpath_testkit::fixture_path;

use super::{load_document, load_rows, select_rows};
use crate::error::CliError;

#[test]
fn rows_array_loads_in_order() {
	let rows = load_rows(&fixture_path("plor_rows.json")).expect("rows load");

	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0].entries()[0], FlatEntry::new("application.applicationId", "APP-1001"));
	assert_eq!(rows[1].entries()[1], FlatEntry::new("application.channel", ""));
}

#[test]
fn single_object_is_one_row() {
	let rows = load_rows(&fixture_path("plor_conflict_rows.json")).expect("row loads");
	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0].len(), 2);
}

#[test]
fn non_object_row_is_rejected() {
	let err = load_rows(&fixture_path("invalid_rows.json")).expect_err("scalar row should fail");
	assert!(matches!(err, CliError::InvalidFixture { ref reason, .. } if reason == "row 1 is not an object"));
}

#[test]
fn missing_file_fails_and_document_loads() {
	let err = load_rows(&fixture_path("missing.json")).expect_err("missing file should fail");
	assert!(matches!(err, CliError::Read { .. }));

	let document = load_document(&fixture_path("plor_template.json")).expect("template loads");
	assert!(document.as_map().is_some_and(|map| map.contains_key("applicants")));
}

#[test]
fn row_selection_bounds() {
	let rows = load_rows(&fixture_path("plor_rows.json")).expect("rows load");

	let picked = select_rows(rows.clone(), Some(1)).expect("row 1 exists");
	assert_eq!(picked, vec![rows[1].clone()]);

	let all = select_rows(rows.clone(), None).expect("no selection keeps all");
	assert_eq!(all.len(), 2);

	let err = select_rows(rows, Some(5)).expect_err("row 5 is out of range");
	assert!(matches!(err, CliError::RowOutOfRange { row: 5, rows: 2 }));
}
