use crate::GeoJsonType;
use anyhow::{Result, anyhow};
use serde_json::Value;
use std::fmt::Debug;

/// A GeoJSON payload that can be decoded from and encoded to a JSON tree.
///
/// For geometries the payload is the `"coordinates"` (or `"geometries"`) member,
/// for a `FeatureCollection` it is the `"features"` array and for a `Feature`
/// it is the whole object. The `"type"` tag is added by [`GeoJson`](crate::GeoJson).
pub trait GeoJsonPayload: Debug + Clone + Sized {
	/// The tag this payload is wrapped with.
	const TYPE: GeoJsonType;

	/// Decodes the payload, validating all structural constraints.
	fn decode(json: &Value) -> Result<Self>;

	/// Encodes the payload. This never fails.
	fn encode(&self) -> Value;
}

/// Read access to the ordered children of a container, plus index replacement.
///
/// Containers own their children exclusively; there is no mutable access.
/// [`replace`](CompositeTrait::replace) builds a new container instead.
pub trait CompositeTrait<Item: Clone>: Clone + Sized {
	/// Builds the container, validating the container's invariants.
	fn from_items(items: Vec<Item>) -> Result<Self>;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Consumes the container and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn get(&self, index: usize) -> Option<&Item> {
		self.as_vec().get(index)
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}

	/// Returns a copy of this container with the element at `index` replaced.
	///
	/// Fails if `index` is out of bounds or the new element breaks an invariant
	/// of the container.
	fn replace(&self, index: usize, item: Item) -> Result<Self> {
		let mut items = self.as_vec().clone();
		let length = items.len();
		let slot = items
			.get_mut(index)
			.ok_or_else(|| anyhow!("index {index} is out of bounds for length {length}"))?;
		*slot = item;
		Self::from_items(items)
	}
}
