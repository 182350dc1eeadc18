//! The [`GeoJson`] dispatcher, its type tags and text readers.

mod geojson_type;
mod read;
mod value;

pub use geojson_type::*;
pub use read::*;
pub use value::*;
