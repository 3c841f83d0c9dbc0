use crate::doc::Value;

/// Convert raw fixture text into a typed scalar.
///
/// First matching rule wins:
/// 1. text containing `.` that parses as `f64` becomes `Float`;
/// 2. text without `.` that parses as `i64` becomes `Integer`;
/// 3. `true`/`false` in any case becomes `Bool`;
/// 4. anything else stays a `String`, unmodified.
///
/// Dotted text that is not a float (`1.0.0`) is kept as a string.
pub fn coerce(raw: &str) -> Value {
	if raw.contains('.') {
		if let Ok(v) = raw.parse::<f64>() {
			return Value::Float(v);
		}
	} else if let Ok(v) = raw.parse::<i64>() {
		return Value::Integer(v);
	}

	if raw.eq_ignore_ascii_case("true") {
		Value::Bool(true)
	} else if raw.eq_ignore_ascii_case("false") {
		Value::Bool(false)
	} else {
		Value::String(raw.to_owned())
	}
}

/// Whether a raw fixture cell means "leave the default".
pub fn is_blank(raw: &str) -> bool {
	raw.trim().is_empty()
}
