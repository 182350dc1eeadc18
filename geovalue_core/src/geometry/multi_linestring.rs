use super::{GeoJsonPayload, LineString};
use crate::{GeoJsonType, json::decode_array};
use anyhow::Result;
use serde_json::Value;

/// Zero or more line strings.
#[derive(Clone, PartialEq, Default)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
	#[must_use]
	pub fn new(line_strings: Vec<LineString>) -> Self {
		Self(line_strings)
	}
}

impl GeoJsonPayload for MultiLineString {
	const TYPE: GeoJsonType = GeoJsonType::MultiLineString;

	fn decode(json: &Value) -> Result<Self> {
		decode_array(json, "MultiLineString", LineString::decode).map(Self)
	}

	fn encode(&self) -> Value {
		Value::Array(self.0.iter().map(LineString::encode).collect())
	}
}

crate::geometry::impl_composite!(MultiLineString, LineString, |items| Ok(MultiLineString::new(items)));

impl From<Vec<LineString>> for MultiLineString {
	fn from(line_strings: Vec<LineString>) -> Self {
		Self(line_strings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeTrait;
	use serde_json::json;

	#[test]
	fn decode_and_encode() -> Result<()> {
		let json = json!([[[100.0, 0.0], [101.0, 1.0]], [[102.0, 2.0], [103.0, 3.0], [104.0, 4.0]]]);
		let multi = MultiLineString::decode(&json)?;
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.last().map(|line| line.len()), Some(3));
		assert_eq!(multi.encode(), json);
		Ok(())
	}

	#[test]
	fn empty_is_valid() -> Result<()> {
		assert!(MultiLineString::decode(&json!([]))?.is_empty());
		Ok(())
	}

	#[test]
	fn short_member_fails() {
		let error = MultiLineString::decode(&json!([[[0.0, 0.0], [1.0, 1.0]], [[0.0, 0.0]]])).unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"MultiLineString[1]: LineString must have at least 2 points, found 1"
		);
	}

	#[test]
	fn replace_member() -> Result<()> {
		let multi = MultiLineString::decode(&json!([[[0.0, 0.0], [1.0, 1.0]]]))?;
		let line = LineString::decode(&json!([[5.0, 5.0], [6.0, 6.0]]))?;
		let replaced = multi.replace(0, line.clone())?;
		assert_eq!(replaced.first(), Some(&line));
		assert!(multi.replace(1, line).is_err());
		Ok(())
	}
}
