use super::{GeoJsonPayload, Point};
use crate::{GeoJsonType, json::decode_array};
use anyhow::{Result, ensure};
use serde_json::Value;

/// An ordered sequence of at least two points.
#[derive(Clone, PartialEq)]
pub struct LineString(Vec<Point>);

impl LineString {
	/// Creates a line string, failing for fewer than two points.
	pub fn new(points: Vec<Point>) -> Result<Self> {
		ensure!(
			points.len() >= 2,
			"LineString must have at least 2 points, found {}",
			points.len()
		);
		Ok(Self(points))
	}

	/// True if there are at least 4 points and the first equals the last.
	#[must_use]
	pub fn is_linear_ring(&self) -> bool {
		self.0.len() >= 4 && self.0.first() == self.0.last()
	}

	#[must_use]
	pub fn points(&self) -> &[Point] {
		&self.0
	}
}

impl GeoJsonPayload for LineString {
	const TYPE: GeoJsonType = GeoJsonType::LineString;

	fn decode(json: &Value) -> Result<Self> {
		Self::new(decode_array(json, "LineString", Point::decode)?)
	}

	fn encode(&self) -> Value {
		Value::Array(self.0.iter().map(Point::encode).collect())
	}
}

crate::geometry::impl_composite!(LineString, Point, LineString::new);

impl TryFrom<Vec<Point>> for LineString {
	type Error = anyhow::Error;

	fn try_from(points: Vec<Point>) -> Result<Self> {
		Self::new(points)
	}
}
