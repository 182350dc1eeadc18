use super::{GeoJsonPayload, Point};
use crate::{GeoJsonType, json::decode_array};
use anyhow::Result;
use serde_json::Value;

/// Zero or more points.
#[derive(Clone, PartialEq, Default)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
	#[must_use]
	pub fn new(points: Vec<Point>) -> Self {
		Self(points)
	}
}

impl GeoJsonPayload for MultiPoint {
	const TYPE: GeoJsonType = GeoJsonType::MultiPoint;

	fn decode(json: &Value) -> Result<Self> {
		decode_array(json, "MultiPoint", Point::decode).map(Self)
	}

	fn encode(&self) -> Value {
		Value::Array(self.0.iter().map(Point::encode).collect())
	}
}

crate::geometry::impl_composite!(MultiPoint, Point, |items| Ok(MultiPoint::new(items)));

impl From<Vec<Point>> for MultiPoint {
	fn from(points: Vec<Point>) -> Self {
		Self(points)
	}
}
