//! A strictly validated GeoJSON value model.
//!
//! [`GeoJson::decode`] turns a `serde_json::Value` into one of the nine GeoJSON
//! types and rejects anything structurally invalid. [`GeoJson::encode`] turns it
//! back into a JSON tree.
//!
//! ```
//! use geovalue_core::{CompositeTrait, GeoJson};
//! use serde_json::json;
//!
//! let json = json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]});
//! let geojson = GeoJson::decode(&json).unwrap();
//! assert_eq!(geojson.as_line_string().unwrap().len(), 2);
//! assert_eq!(geojson.encode(), json);
//! ```

mod error;
mod feature;
pub mod geojson;
mod geometry;
mod json;

pub use error::*;
pub use feature::*;
pub use geojson::*;
pub use geometry::*;
