use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Map payload keyed by field name, kept in insertion order.
pub type ValueMap = IndexMap<String, Value>;

/// Runtime value tree for templates and responses.
#[derive(Debug, Clone)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Integer(i64),
	/// 64-bit float scalar.
	Float(f64),
	/// UTF-8 string scalar.
	String(String),
	/// Contiguous sequence indexed from zero.
	Sequence(Vec<Value>),
	/// Keyed mapping with unique keys.
	Map(ValueMap),
}

impl Value {
	/// Fresh empty map used when vivifying `Field` steps.
	pub fn empty_map() -> Self {
		Self::Map(ValueMap::new())
	}

	/// Fresh empty sequence used when vivifying `IndexedField` steps.
	pub fn empty_sequence() -> Self {
		Self::Sequence(Vec::new())
	}

	/// Short lowercase label of the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Integer(_) => "integer",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::Sequence(_) => "sequence",
			Self::Map(_) => "map",
		}
	}

	/// Whether this is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow the map payload.
	pub fn as_map(&self) -> Option<&ValueMap> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	/// Borrow the sequence payload.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Convert a decoded JSON document into a value tree.
	///
	/// Integers outside `i64` are kept as `Float`.
	pub fn from_json(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(v) => Self::Bool(v),
			serde_json::Value::Number(number) => match number.as_i64() {
				Some(v) => Self::Integer(v),
				None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(text) => Self::String(text),
			serde_json::Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from_json).collect()),
			serde_json::Value::Object(entries) => Self::Map(entries.into_iter().map(|(key, item)| (key, Self::from_json(item))).collect()),
		}
	}

	/// Convert back to a JSON document. Non-finite floats become `null`.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Null => serde_json::Value::Null,
			Self::Bool(v) => serde_json::Value::Bool(*v),
			Self::Integer(v) => serde_json::Value::from(*v),
			Self::Float(v) => serde_json::Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number),
			Self::String(text) => serde_json::Value::String(text.clone()),
			Self::Sequence(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
			Self::Map(map) => serde_json::Value::Object(map.iter().map(|(key, item)| (key.clone(), item.to_json())).collect()),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Null, Self::Null) => true,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Integer(a), Self::Integer(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a == b,
			(Self::Integer(n), Self::Float(f)) | (Self::Float(f), Self::Integer(n)) => int_equals_float(*n, *f),
			(Self::String(a), Self::String(b)) => a == b,
			(Self::Sequence(a), Self::Sequence(b)) => a == b,
			(Self::Map(a), Self::Map(b)) => a.len() == b.len() && a.iter().all(|(key, item)| b.get(key).is_some_and(|other| item == other)),
			(
				Self::Null | Self::Bool(_) | Self::Integer(_) | Self::Float(_) | Self::String(_) | Self::Sequence(_) | Self::Map(_),
				_,
			) => false,
		}
	}
}

/// Exact comparison: `f` must be integral and convert back to `n` without rounding.
fn int_equals_float(n: i64, f: f64) -> bool {
	// 2^63 is exactly representable; anything at or above it is out of range.
	const UPPER: f64 = 9_223_372_036_854_775_808.0;
	f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < UPPER && f as i64 == n
}

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		Self::from_json(json)
	}
}

impl From<&Value> for serde_json::Value {
	fn from(value: &Value) -> Self {
		value.to_json()
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Self::Integer(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::Integer(v) => serializer.serialize_i64(*v),
			Self::Float(v) => serializer.serialize_f64(*v),
			Self::String(text) => serializer.serialize_str(text),
			Self::Sequence(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Map(map) => {
				let mut out = serializer.serialize_map(Some(map.len()))?;
				for (key, item) in map {
					out.serialize_entry(key, item)?;
				}
				out.end()
			}
		}
	}
}

/// Compact JSON rendering.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_json())
	}
}
