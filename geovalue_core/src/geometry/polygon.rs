use super::{GeoJsonPayload, LineString};
use crate::{GeoJsonType, json::decode_array};
use anyhow::{Result, ensure};
use serde_json::Value;

/// A sequence of linear rings. The first ring is the exterior boundary, all
/// further rings are holes. An empty polygon is allowed.
#[derive(Clone, PartialEq)]
pub struct Polygon(Vec<LineString>);

impl Polygon {
	/// Creates a polygon, failing if any ring is not a linear ring.
	pub fn new(rings: Vec<LineString>) -> Result<Self> {
		for (index, ring) in rings.iter().enumerate() {
			ensure!(
				ring.is_linear_ring(),
				"Polygon ring {index} is not a linear ring (needs at least 4 points, first equal to last)"
			);
		}
		Ok(Self(rings))
	}

	#[must_use]
	pub fn rings(&self) -> &[LineString] {
		&self.0
	}

	#[must_use]
	pub fn exterior(&self) -> Option<&LineString> {
		self.0.first()
	}

	#[must_use]
	pub fn interiors(&self) -> &[LineString] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeoJsonPayload for Polygon {
	const TYPE: GeoJsonType = GeoJsonType::Polygon;

	fn decode(json: &Value) -> Result<Self> {
		Self::new(decode_array(json, "Polygon", LineString::decode)?)
	}

	fn encode(&self) -> Value {
		Value::Array(self.0.iter().map(LineString::encode).collect())
	}
}

crate::geometry::impl_composite!(Polygon, LineString, Polygon::new);
