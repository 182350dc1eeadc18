use super::GeoJsonPayload;
use crate::{GeoJson, GeoJsonType, json::decode_array};
use anyhow::{Result, ensure};
use serde_json::Value;

/// A heterogeneous sequence of geometries, possibly nested collections.
///
/// Members are full GeoJSON values whose tag is one of the geometry kinds.
#[derive(Clone, PartialEq, Default)]
pub struct GeometryCollection(Vec<GeoJson>);

impl GeometryCollection {
	/// Creates a collection, failing if a member is a `Feature` or `FeatureCollection`.
	pub fn new(geometries: Vec<GeoJson>) -> Result<Self> {
		for (index, geometry) in geometries.iter().enumerate() {
			ensure!(
				geometry.is_geometry(),
				"GeometryCollection member {index} must be a geometry, found a {}",
				geometry.geojson_type()
			);
		}
		Ok(Self(geometries))
	}

	#[must_use]
	pub fn geometries(&self) -> &[GeoJson] {
		&self.0
	}
}

impl GeoJsonPayload for GeometryCollection {
	const TYPE: GeoJsonType = GeoJsonType::GeometryCollection;

	fn decode(json: &Value) -> Result<Self> {
		Self::new(decode_array(json, "GeometryCollection", GeoJson::decode_detailed)?)
	}

	fn encode(&self) -> Value {
		Value::Array(self.0.iter().map(GeoJson::encode).collect())
	}
}

crate::geometry::impl_composite!(GeometryCollection, GeoJson, GeometryCollection::new);
