use crate::{GeoJson, GeoJsonPayload, GeoJsonType, json::type_as_str};
use anyhow::{Context, Result, anyhow, ensure};
use serde_json::{Map, Value};

/// A geometry (or none) with opaque JSON properties and an optional string id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
	geometry: Option<Box<GeoJson>>,
	properties: Value,
	id: Option<String>,
}

impl Feature {
	/// Creates a feature. Missing properties become JSON `null`.
	///
	/// Fails if `geometry` is a `Feature` or `FeatureCollection`.
	pub fn new(geometry: Option<GeoJson>, properties: Option<Value>, id: Option<String>) -> Result<Self> {
		if let Some(geometry) = &geometry {
			ensure!(
				geometry.is_geometry(),
				"Feature geometry must be a geometry, found a {}",
				geometry.geojson_type()
			);
		}
		Ok(Self {
			geometry: geometry.map(Box::new),
			properties: properties.unwrap_or(Value::Null),
			id,
		})
	}

	#[must_use]
	pub fn geometry(&self) -> Option<&GeoJson> {
		self.geometry.as_deref()
	}

	#[must_use]
	pub fn properties(&self) -> &Value {
		&self.properties
	}

	#[must_use]
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}
}

impl GeoJsonPayload for Feature {
	const TYPE: GeoJsonType = GeoJsonType::Feature;

	/// Decodes the members of a whole `Feature` object.
	///
	/// `"properties"` must be present but may be `null`, `"geometry"` may be
	/// `null`. An `"id"` that is not a string is ignored.
	fn decode(json: &Value) -> Result<Self> {
		let object = json
			.as_object()
			.ok_or_else(|| anyhow!("Feature must be an object, found a {}", type_as_str(json)))?;

		let properties = object
			.get("properties")
			.ok_or_else(|| anyhow!("Feature is missing 'properties'"))?
			.clone();

		let geometry = match object.get("geometry") {
			None => return Err(anyhow!("Feature is missing 'geometry'")),
			Some(Value::Null) => None,
			Some(geometry) => Some(GeoJson::decode_detailed(geometry).context("Feature geometry")?),
		};

		let id = object.get("id").and_then(Value::as_str).map(str::to_owned);

		Self::new(geometry, Some(properties), id)
	}

	fn encode(&self) -> Value {
		let mut object = Map::new();
		object.insert("type".to_owned(), Value::from(GeoJsonType::Feature.as_str()));
		object.insert("properties".to_owned(), self.properties.clone());
		object.insert("geometry".to_owned(), self.geometry().map_or(Value::Null, GeoJson::encode));
		if let Some(id) = &self.id {
			object.insert("id".to_owned(), Value::from(id.as_str()));
		}
		Value::Object(object)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Point;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn decode_full_feature() -> Result<()> {
		let json = json!({
			"type": "Feature",
			"id": "f1",
			"properties": {"name": "Dinagat Islands", "population": 128_117},
			"geometry": {"type": "Point", "coordinates": [125.6, 10.1]}
		});
		let feature = Feature::decode(&json)?;
		assert_eq!(feature.id(), Some("f1"));
		assert_eq!(feature.properties()["name"], json!("Dinagat Islands"));
		assert_eq!(
			feature.geometry().and_then(GeoJson::as_point),
			Some(&Point::from([125.6, 10.1]))
		);
		assert_eq!(feature.encode(), json);
		Ok(())
	}

	#[test]
	fn null_geometry_and_properties() -> Result<()> {
		let json = json!({"type": "Feature", "properties": null, "geometry": null});
		let feature = Feature::decode(&json)?;
		assert_eq!(feature.geometry(), None);
		assert_eq!(feature.properties(), &Value::Null);
		assert_eq!(feature.id(), None);
		assert_eq!(feature.encode(), json);
		Ok(())
	}

	#[rstest]
	#[case(json!({"type": "Feature", "geometry": null}), "Feature is missing 'properties'")]
	#[case(json!({"type": "Feature", "properties": {}}), "Feature is missing 'geometry'")]
	#[case(json!([]), "Feature must be an object, found a array")]
	#[case(
		json!({"type": "Feature", "properties": {}, "geometry": {"type": "Feature", "properties": {}, "geometry": null}}),
		"Feature geometry must be a geometry, found a Feature"
	)]
	fn invalid(#[case] json: Value, #[case] message: &str) {
		assert_eq!(Feature::decode(&json).unwrap_err().to_string(), message);
	}

	#[test]
	fn invalid_geometry_fails() {
		let json = json!({"type": "Feature", "properties": {}, "geometry": {"type": "Point"}});
		let error = Feature::decode(&json).unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"Feature geometry: invalid GeoJSON object of type 'Point': Point is missing 'coordinates'"
		);
	}

	#[rstest]
	#[case(json!(7))]
	#[case(json!(null))]
	#[case(json!({"nested": "id"}))]
	fn non_string_id_is_absent(#[case] id: Value) -> Result<()> {
		let json = json!({"type": "Feature", "properties": null, "geometry": null, "id": id});
		let feature = Feature::decode(&json)?;
		assert_eq!(feature.id(), None);
		assert_eq!(feature.encode().get("id"), None);
		Ok(())
	}

	#[test]
	fn construct() -> Result<()> {
		let feature = Feature::new(Some(GeoJson::from(Point::from([1.0, 2.0]))), None, Some("a".into()))?;
		assert_eq!(feature.properties(), &Value::Null);
		assert_eq!(
			feature.encode(),
			json!({
				"type": "Feature",
				"properties": null,
				"geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
				"id": "a"
			})
		);

		let nested = GeoJson::from(Feature::default());
		assert!(Feature::new(Some(nested), None, None).is_err());
		Ok(())
	}
}
