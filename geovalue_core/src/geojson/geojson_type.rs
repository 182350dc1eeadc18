use crate::GeoJsonError;
use std::{fmt, str::FromStr};

/// The `"type"` discriminator of a GeoJSON object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
	Feature,
	FeatureCollection,
}

impl GeoJsonType {
	pub const ALL: [GeoJsonType; 9] = [
		GeoJsonType::Point,
		GeoJsonType::MultiPoint,
		GeoJsonType::LineString,
		GeoJsonType::MultiLineString,
		GeoJsonType::Polygon,
		GeoJsonType::MultiPolygon,
		GeoJsonType::GeometryCollection,
		GeoJsonType::Feature,
		GeoJsonType::FeatureCollection,
	];

	/// The exact tag string used on the wire.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use GeoJsonType::*;
		match self {
			Point => "Point",
			MultiPoint => "MultiPoint",
			LineString => "LineString",
			MultiLineString => "MultiLineString",
			Polygon => "Polygon",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
			Feature => "Feature",
			FeatureCollection => "FeatureCollection",
		}
	}

	/// Looks up a tag string. Matching is case-sensitive.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		GeoJsonType::ALL.into_iter().find(|t| t.as_str() == name)
	}

	/// True for the seven geometry types, including `GeometryCollection`.
	#[must_use]
	pub fn is_geometry(&self) -> bool {
		!matches!(self, GeoJsonType::Feature | GeoJsonType::FeatureCollection)
	}

	/// Key under which the payload is nested next to `"type"`.
	///
	/// `Feature` has none: its members sit directly in the object.
	#[must_use]
	pub fn payload_key(&self) -> Option<&'static str> {
		use GeoJsonType::*;
		match self {
			Point | MultiPoint | LineString | MultiLineString | Polygon | MultiPolygon => Some("coordinates"),
			GeometryCollection => Some("geometries"),
			FeatureCollection => Some("features"),
			Feature => None,
		}
	}
}

impl fmt::Display for GeoJsonType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeoJsonType {
	type Err = GeoJsonError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		GeoJsonType::from_name(name).ok_or_else(|| GeoJsonError::UnsupportedType {
			type_name: name.to_owned(),
		})
	}
}
