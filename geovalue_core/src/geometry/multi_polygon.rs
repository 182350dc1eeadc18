use super::{GeoJsonPayload, Polygon};
use crate::{GeoJsonType, json::decode_array};
use anyhow::Result;
use serde_json::Value;

/// Zero or more polygons.
#[derive(Clone, PartialEq, Default)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
	#[must_use]
	pub fn new(polygons: Vec<Polygon>) -> Self {
		Self(polygons)
	}
}

impl GeoJsonPayload for MultiPolygon {
	const TYPE: GeoJsonType = GeoJsonType::MultiPolygon;

	fn decode(json: &Value) -> Result<Self> {
		decode_array(json, "MultiPolygon", Polygon::decode).map(Self)
	}

	fn encode(&self) -> Value {
		Value::Array(self.0.iter().map(Polygon::encode).collect())
	}
}

crate::geometry::impl_composite!(MultiPolygon, Polygon, |items| Ok(MultiPolygon::new(items)));

impl From<Vec<Polygon>> for MultiPolygon {
	fn from(polygons: Vec<Polygon>) -> Self {
		Self(polygons)
	}
}
