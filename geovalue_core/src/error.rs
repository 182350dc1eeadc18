//! The two-kind error taxonomy reported by [`GeoJson::decode`](crate::GeoJson::decode).

use crate::GeoJsonType;
use std::fmt;

/// The bare kind of a [`GeoJsonError`], without the attempted type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoJsonErrorKind {
	UnsupportedType,
	InvalidGeoJsonObject,
}

/// Reason why a JSON value could not be decoded as GeoJSON.
///
/// Every failure below the top level collapses into `InvalidGeoJsonObject`;
/// the precise reason is only logged at `debug` level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeoJsonError {
	/// The `"type"` member names none of the nine GeoJSON types.
	UnsupportedType { type_name: String },
	/// The type is known (or missing, then `None`) but the payload is not valid.
	InvalidGeoJsonObject { type_name: Option<GeoJsonType> },
}

impl GeoJsonError {
	#[must_use]
	pub fn kind(&self) -> GeoJsonErrorKind {
		match self {
			GeoJsonError::UnsupportedType { .. } => GeoJsonErrorKind::UnsupportedType,
			GeoJsonError::InvalidGeoJsonObject { .. } => GeoJsonErrorKind::InvalidGeoJsonObject,
		}
	}

	/// The `"type"` string that was attempted, if there was one.
	#[must_use]
	pub fn type_name(&self) -> Option<&str> {
		match self {
			GeoJsonError::UnsupportedType { type_name } => Some(type_name),
			GeoJsonError::InvalidGeoJsonObject { type_name } => type_name.map(|t| t.as_str()),
		}
	}
}

impl fmt::Display for GeoJsonError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeoJsonError::UnsupportedType { type_name } => write!(f, "unsupported GeoJSON type '{type_name}'"),
			GeoJsonError::InvalidGeoJsonObject { type_name: Some(t) } => write!(f, "invalid GeoJSON object of type '{t}'"),
			GeoJsonError::InvalidGeoJsonObject { type_name: None } => {
				write!(f, "invalid GeoJSON object: missing or non-string 'type'")
			}
		}
	}
}

impl std::error::Error for GeoJsonError {}
