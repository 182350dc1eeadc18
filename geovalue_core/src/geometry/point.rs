use super::{GeoJsonPayload, Position};
use crate::GeoJsonType;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A single position.
///
/// Equality is exact and element-wise, including the number of values;
/// compare with a tolerance at the call site if needed.
#[derive(Clone, PartialEq)]
pub struct Point(Position);

impl Point {
	#[must_use]
	pub fn new(position: Position) -> Self {
		Self(position)
	}

	/// Creates a point from raw values, failing for fewer than two.
	pub fn from_coordinates(values: Vec<f64>) -> Result<Self> {
		Position::new(values).map(Self)
	}

	#[must_use]
	pub fn position(&self) -> &Position {
		&self.0
	}

	#[must_use]
	pub fn coordinates(&self) -> &[f64] {
		self.0.as_slice()
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn easting(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn northing(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn altitude(&self) -> Option<f64> {
		self.0.z()
	}

	/// Number of coordinate values, at least 2.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<f64> {
		self.0.get(index)
	}

	/// Returns a copy with the coordinate at `index` replaced.
	pub fn replace(&self, index: usize, value: f64) -> Result<Self> {
		self.0.replace(index, value).map(Self)
	}
}

impl GeoJsonPayload for Point {
	const TYPE: GeoJsonType = GeoJsonType::Point;

	fn decode(json: &Value) -> Result<Self> {
		Position::decode(json).map(Self)
	}

	fn encode(&self) -> Value {
		self.0.encode()
	}
}

impl Debug for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for Point
where
	Position: From<T>,
{
	fn from(value: T) -> Self {
		Self(Position::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn named_accessors() -> Result<()> {
		let point = Point::from_coordinates(vec![2.3522, 48.8566, 35.0])?;
		assert_abs_diff_eq!(point.longitude(), 2.3522);
		assert_abs_diff_eq!(point.easting(), 2.3522);
		assert_abs_diff_eq!(point.latitude(), 48.8566);
		assert_abs_diff_eq!(point.northing(), 48.8566);
		assert_eq!(point.altitude(), Some(35.0));
		assert_eq!(point.len(), 3);
		Ok(())
	}

	#[test]
	fn basic_point_has_no_altitude() {
		assert_eq!(Point::from([0.0, 0.0]).altitude(), None);
	}

	#[rstest]
	#[case(json!([0.0, 0.0]), json!([0.0, 0.0]), true)]
	#[case(json!([0.0, 0.0]), json!([0.0, 1.0]), false)]
	#[case(json!([0.0, 0.0]), json!([0.0, 0.0, 0.0]), false)]
	#[case(json!([1.5, 2.5, 3.5]), json!([1.5, 2.5, 3.5]), true)]
	fn equality(#[case] a: Value, #[case] b: Value, #[case] equal: bool) -> Result<()> {
		assert_eq!(Point::decode(&a)? == Point::decode(&b)?, equal);
		Ok(())
	}

	#[rstest]
	#[case(json!([100.0, 0.0]))]
	#[case(json!([100.0, 0.0, 12.0]))]
	#[case(json!([-0.5, 51.25, 3.0, 4.0]))]
	fn round_trip(#[case] json: Value) -> Result<()> {
		assert_eq!(Point::decode(&json)?.encode(), json);
		Ok(())
	}

	#[rstest]
	#[case(json!([]))]
	#[case(json!([0.0]))]
	#[case(json!([0.0, "a"]))]
	#[case(json!(null))]
	#[case(json!("0,0"))]
	fn invalid(#[case] json: Value) {
		assert!(Point::decode(&json).is_err());
	}

	#[test]
	fn construct_with_too_few_values_fails() {
		assert!(Point::from_coordinates(vec![1.0]).is_err());
	}

	#[test]
	fn replace_coordinate() -> Result<()> {
		let point = Point::from([1.0, 2.0]);
		assert_eq!(point.replace(0, 9.0)?, Point::from([9.0, 2.0]));
		assert!(point.replace(5, 9.0).is_err());
		Ok(())
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Point::from([1.0, 2.0])), "[1.0, 2.0]");
	}
}
