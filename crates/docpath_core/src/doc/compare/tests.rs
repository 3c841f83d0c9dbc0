use serde_json::json;

use crate::doc::{FieldPath, Value, compare, compare_probe, probe_path};

fn response() -> Value {
	Value::from_json(json!({
		"status": "SUCCESS",
		"decision": {"outcome": "APPROVED", "confidence": 0.95, "riskScore": 650, "final": true},
	}))
}

fn check(input: &str, expected: &str) -> crate::doc::ValidationOutcome {
	let root = response();
	let path = FieldPath::parse(input).expect("path parses");
	compare_probe(&probe_path(&root, &path), expected)
}

#[test]
fn exact_string_matches() {
	let outcome = check("status", "SUCCESS");
	assert!(outcome.matched);
	assert_eq!(outcome.detail, "ok");
	assert_eq!(outcome.actual, Some(Value::String("SUCCESS".to_owned())));
}

#[test]
fn strings_are_case_sensitive() {
	let outcome = check("status", "success");
	assert!(!outcome.matched);
	assert_eq!(outcome.detail, r#"expected "success" (string), got "SUCCESS" (string)"#);
}

#[test]
fn typed_expectations_compare_by_value() {
	assert!(check("decision.riskScore", "650").matched);
	assert!(check("decision.riskScore", "650.0").matched);
	assert!(check("decision.confidence", "0.95").matched);
	assert!(check("decision.final", "TRUE").matched);
	assert!(!check("decision.riskScore", "651").matched);
}

#[test]
fn absence_never_matches() {
	let outcome = check("missing.field", "anything");
	assert!(!outcome.matched);
	assert_eq!(outcome.actual, None);
	assert!(outcome.detail.starts_with("path not found"), "unexpected detail: {}", outcome.detail);

	let plain = compare(None, "x");
	assert!(!plain.matched);
	assert_eq!(plain.detail, "path not found");
}

#[test]
fn actual_null_does_not_match_text() {
	let root = Value::from_json(json!({"note": null}));
	let outcome = compare(Some(&root.as_map().expect("map")["note"]), "null");
	assert!(!outcome.matched);
	assert_eq!(outcome.actual, Some(Value::Null));
}

#[test]
fn outcome_serializes_without_actual_when_absent() {
	let outcome = compare(None, "42");
	let json = serde_json::to_value(&outcome).expect("outcome serializes");
	assert_eq!(json, json!({"matched": false, "expected": 42, "detail": "path not found"}));
}

#[test]
fn found_read_compares_like_direct_value() {
	let root = response();
	let path = FieldPath::parse("decision.outcome").expect("path parses");
	let direct = root.as_map().and_then(|map| map.get("decision")?.as_map()?.get("outcome"));

	for expected in ["APPROVED", "DECLINED"] {
		assert_eq!(compare_probe(&probe_path(&root, &path), expected), compare(direct, expected));
	}
}
