use super::Feature;
use crate::{GeoJson, GeoJsonPayload, GeoJsonType, json::decode_array};
use anyhow::{Result, bail};
use serde_json::Value;

/// An ordered sequence of features.
#[derive(Clone, PartialEq, Default)]
pub struct FeatureCollection(Vec<Feature>);

impl FeatureCollection {
	#[must_use]
	pub fn new(features: Vec<Feature>) -> Self {
		Self(features)
	}

	/// Builds a collection from untyped values, failing unless every value is a `Feature`.
	pub fn from_geojson(values: Vec<GeoJson>) -> Result<Self> {
		values
			.into_iter()
			.enumerate()
			.map(|(index, value)| match value {
				GeoJson::Feature(feature) => Ok(feature),
				other => bail!(
					"FeatureCollection member {index} must be a Feature, found a {}",
					other.geojson_type()
				),
			})
			.collect::<Result<Vec<_>>>()
			.map(Self)
	}

	#[must_use]
	pub fn features(&self) -> &[Feature] {
		&self.0
	}
}

impl GeoJsonPayload for FeatureCollection {
	const TYPE: GeoJsonType = GeoJsonType::FeatureCollection;

	fn decode(json: &Value) -> Result<Self> {
		Self::from_geojson(decode_array(json, "FeatureCollection", GeoJson::decode_detailed)?)
	}

	fn encode(&self) -> Value {
		Value::Array(self.0.iter().map(Feature::encode).collect())
	}
}

crate::geometry::impl_composite!(FeatureCollection, Feature, |items| Ok(FeatureCollection::new(items)));

impl From<Vec<Feature>> for FeatureCollection {
	fn from(features: Vec<Feature>) -> Self {
		Self(features)
	}
}

impl IntoIterator for FeatureCollection {
	type Item = Feature;
	type IntoIter = std::vec::IntoIter<Feature>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeTrait, Point};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	fn feature(id: &str) -> Value {
		json!({"type": "Feature", "properties": null, "geometry": null, "id": id})
	}

	#[test]
	fn decode_keeps_order() -> Result<()> {
		let json = json!([feature("first"), feature("second")]);
		let collection = FeatureCollection::decode(&json)?;
		let ids: Vec<_> = collection.iter().map(Feature::id).collect();
		assert_eq!(ids, vec![Some("first"), Some("second")]);
		assert_eq!(collection.encode(), json);
		Ok(())
	}

	#[test]
	fn raw_geometry_member_fails() {
		let json = json!([feature("first"), {"type": "Point", "coordinates": [0.0, 0.0]}]);
		let error = FeatureCollection::decode(&json).unwrap_err();
		assert_eq!(
			error.to_string(),
			"FeatureCollection member 1 must be a Feature, found a Point"
		);
	}

	#[test]
	fn invalid_feature_fails() {
		let json = json!([{"type": "Feature", "geometry": null}]);
		assert!(FeatureCollection::decode(&json).is_err());
		assert!(FeatureCollection::decode(&json!({})).is_err());
	}

	#[test]
	fn empty_is_valid() -> Result<()> {
		let collection = FeatureCollection::decode(&json!([]))?;
		assert!(collection.is_empty());
		assert_eq!(collection.encode(), json!([]));
		Ok(())
	}

	#[test]
	fn from_geojson() -> Result<()> {
		let feature = Feature::new(None, Some(json!({"a": 1})), None)?;
		let collection = FeatureCollection::from_geojson(vec![GeoJson::from(feature.clone())])?;
		assert_eq!(collection.first(), Some(&feature));

		let point = GeoJson::from(Point::from([0.0, 0.0]));
		assert!(FeatureCollection::from_geojson(vec![GeoJson::from(feature), point]).is_err());
		Ok(())
	}

	#[test]
	fn replace_and_consume() -> Result<()> {
		let collection = FeatureCollection::decode(&json!([feature("first"), feature("second")]))?;
		let third = Feature::new(None, None, Some("third".into()))?;
		let replaced = collection.replace(0, third)?;
		let ids: Vec<_> = replaced.into_iter().map(|f| f.id().map(str::to_owned)).collect();
		assert_eq!(ids, vec![Some("third".to_owned()), Some("second".to_owned())]);
		assert_eq!(collection.first().and_then(Feature::id), Some("first"));
		Ok(())
	}
}
