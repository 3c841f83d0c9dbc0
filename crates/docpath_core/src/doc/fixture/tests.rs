use pretty_assertions::assert_eq;
use serde_json::json;

use crate::doc::{DocPathError, FixtureRow, FlatEntry, PopulateOptions, ValidateOptions, Value, populate, populate_rows, validate};

fn doc(json: serde_json::Value) -> Value {
	Value::from_json(json)
}

fn template() -> Value {
	doc(json!({
		"application": {"applicationId": "TEMPLATE", "channel": "web"},
		"applicants": [{"firstName": "John", "lastName": "Doe"}],
	}))
}

#[test]
fn populate_writes_coerced_values_into_a_copy() {
	let template = template();
	let row: FixtureRow = [
		("application.applicationId", "APP-42"),
		("application.amount", "2500.50"),
		("applicants[0].firstName", "Ada"),
		("applicants[1].age", "36"),
		("applicants[1].primary", "false"),
	]
	.into_iter()
	.collect();

	let populated = populate(&template, &row, &PopulateOptions::default()).expect("row populates");

	assert_eq!(
		populated,
		doc(json!({
			"application": {"applicationId": "APP-42", "channel": "web", "amount": 2500.5},
			"applicants": [{"firstName": "Ada", "lastName": "Doe"}, {"age": 36, "primary": false}],
		}))
	);
	assert_eq!(template, self::template());
}

#[test]
fn populate_skips_blank_and_response_entries() {
	let row: FixtureRow = [("application.applicationId", "  "), ("response.status", "SUCCESS"), ("application.channel", "")]
		.into_iter()
		.collect();

	let populated = populate(&template(), &row, &PopulateOptions::default()).expect("row populates");

	assert_eq!(populated, template());
}

#[test]
fn populate_can_keep_blank_cells() {
	let row: FixtureRow = [("application.channel", "")].into_iter().collect();
	let options = PopulateOptions {
		skip_blank: false,
		..PopulateOptions::default()
	};

	let populated = populate(&template(), &row, &options).expect("row populates");

	let expected = doc(json!({
		"application": {"applicationId": "TEMPLATE", "channel": ""},
		"applicants": [{"firstName": "John", "lastName": "Doe"}],
	}));
	assert_eq!(populated, expected);
}

#[test]
fn populate_fails_fast_on_bad_path() {
	let row: FixtureRow = [("application.applicationId", "A"), ("applicants[x].firstName", "B")].into_iter().collect();

	let err = populate(&template(), &row, &PopulateOptions::default()).expect_err("bad index should fail");

	assert!(matches!(err, DocPathError::PathSyntax { ref path, .. } if path == "applicants[x].firstName"));
}

#[test]
fn populate_fails_fast_on_conflict() {
	let template = doc(json!({"a": {"b": 1}}));
	let row: FixtureRow = [("a.b.c", "2")].into_iter().collect();

	let err = populate(&template, &row, &PopulateOptions::default()).expect_err("conflict should fail");

	assert!(matches!(err, DocPathError::PathConflict { .. }));
	assert!(err.to_string().contains("a.b.c"), "unexpected message: {err}");
}

#[test]
fn populate_rejects_oversized_indices() {
	for input in ["applicants[18446744073709551615].firstName", "applicants[4611686018427387904].x"] {
		let row: FixtureRow = [("application.applicationId", "A"), (input, "B")].into_iter().collect();

		let err = populate(&template(), &row, &PopulateOptions::default()).expect_err("oversized index should fail");

		assert!(matches!(err, DocPathError::IndexLimit { ref path, .. } if path == input), "unexpected error: {err:?}");
		assert!(err.to_string().contains("exceeds the write limit"), "unexpected message: {err}");
	}
}

#[test]
fn populate_rows_builds_one_document_per_row() {
	let rows: Vec<FixtureRow> = ["A", "B", "C"]
		.into_iter()
		.map(|id| FixtureRow::from_iter([("application.applicationId", id)]))
		.collect();

	let documents = populate_rows(&template(), &rows, &PopulateOptions::default()).expect("rows populate");

	let ids: Vec<&str> = documents
		.iter()
		.filter_map(|item| item.as_map()?.get("application")?.as_map()?.get("applicationId")?.as_str())
		.collect();
	assert_eq!(ids, ["A", "B", "C"]);
}

#[test]
fn validate_reports_one_outcome_per_response_path_in_order() {
	let response = doc(json!({"status": "SUCCESS", "decision": {"riskScore": 650}}));
	let row: FixtureRow = [
		("application.applicationId", "APP-1"),
		("response.status", "SUCCESS"),
		("response.missing.field", "x"),
		("response.decision..riskScore", "650"),
		("response.decision.riskScore", "650"),
		("response.status.code", ""),
	]
	.into_iter()
	.collect();

	let report = validate(&response, &row, &ValidateOptions::default());

	let keys: Vec<&str> = report.iter().map(|(path, _)| path).collect();
	assert_eq!(
		keys,
		["response.status", "response.missing.field", "response.decision..riskScore", "response.decision.riskScore"]
	);
	assert_eq!(report.passed_count(), 2);
	assert!(!report.all_passed());

	let missing = report.get("response.missing.field").expect("missing path reported");
	assert!(!missing.matched);
	assert!(missing.detail.contains("not found"), "unexpected detail: {}", missing.detail);

	let malformed = report.get("response.decision..riskScore").expect("malformed path reported");
	assert!(!malformed.matched);
	assert!(malformed.detail.contains("empty step name"), "unexpected detail: {}", malformed.detail);

	let failures: Vec<&str> = report.failures().map(|(path, _)| path).collect();
	assert_eq!(failures, ["response.missing.field", "response.decision..riskScore"]);
}

#[test]
fn validate_is_case_sensitive_for_strings() {
	let response = doc(json!({"status": "SUCCESS"}));
	let row: FixtureRow = [("response.status", "success")].into_iter().collect();

	let report = validate(&response, &row, &ValidateOptions::default());

	assert!(!report.all_passed());
	assert_eq!(report.len(), 1);
}

#[test]
fn empty_report_passes() {
	let report = validate(&Value::empty_map(), &FixtureRow::new(), &ValidateOptions::default());
	assert!(report.is_empty());
	assert!(report.all_passed());
	report.log_results();
}

#[test]
fn custom_prefix_selects_entries() {
	let response = doc(json!({"id": 7}));
	let row: FixtureRow = [("expect:id", "7"), ("response.id", "8")].into_iter().collect();
	let options = ValidateOptions {
		response_prefix: "expect:".to_owned(),
		..ValidateOptions::default()
	};

	let report = validate(&response, &row, &options);

	assert_eq!(report.len(), 1);
	assert!(report.all_passed());
}

#[test]
fn report_serializes_as_ordered_object() {
	let response = doc(json!({"status": "SUCCESS"}));
	let row: FixtureRow = [("response.status", "SUCCESS"), ("response.gone", "1")].into_iter().collect();

	let report = validate(&response, &row, &ValidateOptions::default());
	let text = serde_json::to_string(&report).expect("report serializes");

	assert_eq!(
		text,
		r#"{"response.status":{"matched":true,"actual":"SUCCESS","expected":"SUCCESS","detail":"ok"},"response.gone":{"matched":false,"expected":1,"detail":"path not found: missing key \"gone\" at step 0"}}"#
	);
}

#[test]
fn row_from_json_object_renders_scalars_as_text() {
	let object = json!({"a": "x", "b": 3, "c": 1.5, "d": true, "e": null, "f": [1]});
	let row = FixtureRow::from_json_object(object.as_object().expect("object"));

	assert_eq!(
		row.entries(),
		[
			FlatEntry::new("a", "x"),
			FlatEntry::new("b", "3"),
			FlatEntry::new("c", "1.5"),
			FlatEntry::new("d", "true"),
			FlatEntry::new("e", ""),
			FlatEntry::new("f", "[1]"),
		]
	);
}
