//! Typed GeoJSON geometries, from a single [`Position`] up to a [`GeometryCollection`].

mod geometry_collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod position;
mod traits;

pub(crate) use macros::impl_composite;

pub use geometry_collection::GeometryCollection;
pub use linestring::LineString;
pub use multi_linestring::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use position::Position;
pub use traits::{CompositeTrait, GeoJsonPayload};
