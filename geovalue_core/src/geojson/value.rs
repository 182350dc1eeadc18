use crate::{
	Feature, FeatureCollection, GeoJsonError, GeoJsonPayload, GeoJsonType, GeometryCollection, LineString,
	MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// A decoded GeoJSON value: exactly one of the nine GeoJSON types.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	Point(Point),
	MultiPoint(MultiPoint),
	LineString(LineString),
	MultiLineString(MultiLineString),
	Polygon(Polygon),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
	Feature(Feature),
	FeatureCollection(FeatureCollection),
}

impl GeoJson {
	/// Decodes a JSON object by its `"type"` member.
	///
	/// An unknown tag yields [`GeoJsonError::UnsupportedType`]. Any other failure,
	/// at any nesting depth, yields [`GeoJsonError::InvalidGeoJsonObject`]; the
	/// precise reason is logged at `debug` level.
	pub fn decode(json: &Value) -> Result<GeoJson, GeoJsonError> {
		Self::decode_detailed(json).map_err(|error| {
			debug!("{error:#}");
			error
				.downcast_ref::<GeoJsonError>()
				.cloned()
				.unwrap_or(GeoJsonError::InvalidGeoJsonObject { type_name: None })
		})
	}

	/// Like [`GeoJson::decode`], but keeps the full reason chain.
	///
	/// The returned error always downcasts to [`GeoJsonError`].
	pub fn decode_detailed(json: &Value) -> Result<GeoJson> {
		let geojson_type = Self::read_type(json)?;
		trace!("decoding {geojson_type}");
		Self::decode_payload(geojson_type, json).context(GeoJsonError::InvalidGeoJsonObject {
			type_name: Some(geojson_type),
		})
	}

	fn read_type(json: &Value) -> Result<GeoJsonType, GeoJsonError> {
		json
			.get("type")
			.and_then(Value::as_str)
			.ok_or(GeoJsonError::InvalidGeoJsonObject { type_name: None })?
			.parse()
	}

	fn decode_payload(geojson_type: GeoJsonType, json: &Value) -> Result<GeoJson> {
		use GeoJsonType as T;

		let payload = match geojson_type.payload_key() {
			Some(key) => json
				.get(key)
				.ok_or_else(|| anyhow!("{geojson_type} is missing '{key}'"))?,
			None => json,
		};

		Ok(match geojson_type {
			T::Point => GeoJson::Point(Point::decode(payload)?),
			T::MultiPoint => GeoJson::MultiPoint(MultiPoint::decode(payload)?),
			T::LineString => GeoJson::LineString(LineString::decode(payload)?),
			T::MultiLineString => GeoJson::MultiLineString(MultiLineString::decode(payload)?),
			T::Polygon => GeoJson::Polygon(Polygon::decode(payload)?),
			T::MultiPolygon => GeoJson::MultiPolygon(MultiPolygon::decode(payload)?),
			T::GeometryCollection => GeoJson::GeometryCollection(GeometryCollection::decode(payload)?),
			T::Feature => GeoJson::Feature(Feature::decode(payload)?),
			T::FeatureCollection => GeoJson::FeatureCollection(FeatureCollection::decode(payload)?),
		})
	}

	/// Encodes as a GeoJSON object with its `"type"` tag. This never fails.
	#[must_use]
	pub fn encode(&self) -> Value {
		let payload = match self {
			GeoJson::Point(g) => g.encode(),
			GeoJson::MultiPoint(g) => g.encode(),
			GeoJson::LineString(g) => g.encode(),
			GeoJson::MultiLineString(g) => g.encode(),
			GeoJson::Polygon(g) => g.encode(),
			GeoJson::MultiPolygon(g) => g.encode(),
			GeoJson::GeometryCollection(g) => g.encode(),
			GeoJson::Feature(f) => return f.encode(),
			GeoJson::FeatureCollection(f) => f.encode(),
		};

		let geojson_type = self.geojson_type();
		let mut object = Map::new();
		object.insert("type".to_owned(), Value::from(geojson_type.as_str()));
		if let Some(key) = geojson_type.payload_key() {
			object.insert(key.to_owned(), payload);
		}
		Value::Object(object)
	}

	#[must_use]
	pub fn geojson_type(&self) -> GeoJsonType {
		match self {
			GeoJson::Point(_) => GeoJsonType::Point,
			GeoJson::MultiPoint(_) => GeoJsonType::MultiPoint,
			GeoJson::LineString(_) => GeoJsonType::LineString,
			GeoJson::MultiLineString(_) => GeoJsonType::MultiLineString,
			GeoJson::Polygon(_) => GeoJsonType::Polygon,
			GeoJson::MultiPolygon(_) => GeoJsonType::MultiPolygon,
			GeoJson::GeometryCollection(_) => GeoJsonType::GeometryCollection,
			GeoJson::Feature(_) => GeoJsonType::Feature,
			GeoJson::FeatureCollection(_) => GeoJsonType::FeatureCollection,
		}
	}

	/// True for the seven geometry variants.
	#[must_use]
	pub fn is_geometry(&self) -> bool {
		self.geojson_type().is_geometry()
	}

	/// Compact JSON text.
	#[must_use]
	pub fn to_json_string(&self) -> String {
		self.encode().to_string()
	}

	/// Indented JSON text.
	#[must_use]
	pub fn to_json_string_pretty(&self) -> String {
		format!("{:#}", self.encode())
	}
}

macro_rules! impl_variants {
	($($variant:ident, $accessor:ident);* $(;)?) => {$(
		impl From<$variant> for GeoJson {
			fn from(value: $variant) -> Self {
				GeoJson::$variant(value)
			}
		}

		impl GeoJson {
			#[must_use]
			pub fn $accessor(&self) -> Option<&$variant> {
				match self {
					GeoJson::$variant(value) => Some(value),
					_ => None,
				}
			}
		}
	)*};
}

impl_variants!(
	Point, as_point;
	MultiPoint, as_multi_point;
	LineString, as_line_string;
	MultiLineString, as_multi_line_string;
	Polygon, as_polygon;
	MultiPolygon, as_multi_polygon;
	GeometryCollection, as_geometry_collection;
	Feature, as_feature;
	FeatureCollection, as_feature_collection;
);

impl TryFrom<&Value> for GeoJson {
	type Error = GeoJsonError;

	fn try_from(json: &Value) -> Result<Self, Self::Error> {
		GeoJson::decode(json)
	}
}

impl From<&GeoJson> for Value {
	fn from(geojson: &GeoJson) -> Self {
		geojson.encode()
	}
}

impl fmt::Display for GeoJson {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.encode(), f)
	}
}

impl FromStr for GeoJson {
	type Err = anyhow::Error;

	fn from_str(text: &str) -> Result<Self> {
		crate::parse_geojson(text)
	}
}

impl Serialize for GeoJson {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.encode().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for GeoJson {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let json = Value::deserialize(deserializer)?;
		GeoJson::decode(&json).map_err(de::Error::custom)
	}
}
