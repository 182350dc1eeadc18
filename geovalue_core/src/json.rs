//! Small helpers over `serde_json::Value` shared by all decoders.

use anyhow::{Result, anyhow};
use serde_json::Value;

/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
pub(crate) fn type_as_str(value: &Value) -> &'static str {
	match value {
		Value::Array(_) => "array",
		Value::Bool(_) => "boolean",
		Value::Null => "null",
		Value::Number(_) => "number",
		Value::Object(_) => "object",
		Value::String(_) => "string",
	}
}

/// Borrow the elements of `value` if it is an array.
///
/// `what` names the expected thing in the error message.
pub(crate) fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("{what} must be an array, found a {}", type_as_str(value)))
}

/// Decode every element of an array with `decode`, failing on the first bad element.
pub(crate) fn decode_array<T>(value: &Value, what: &str, decode: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	as_array(value, what)?
		.iter()
		.enumerate()
		.map(|(index, item)| decode(item).map_err(|e| e.context(format!("{what}[{index}]"))))
		.collect()
}
