use crate::json::{as_array, type_as_str};
use anyhow::{Result, anyhow, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// An ordered tuple of at least two coordinates.
///
/// Index 0 is longitude or easting, index 1 latitude or northing, index 2 the
/// optional altitude. Further values are kept but have no name.
#[derive(Clone, PartialEq)]
pub struct Position(Vec<f64>);

impl Position {
	/// Creates a position, failing if fewer than two values are given.
	pub fn new(values: Vec<f64>) -> Result<Self> {
		ensure!(
			values.len() >= 2,
			"position must have at least 2 values, found {}",
			values.len()
		);
		Ok(Self(values))
	}

	/// Decodes a JSON array of numbers. Non-numeric elements are rejected.
	pub fn decode(json: &Value) -> Result<Self> {
		let values = as_array(json, "position")?
			.iter()
			.map(|v| {
				v.as_f64()
					.ok_or_else(|| anyhow!("position values must be numbers, found a {}", type_as_str(v)))
			})
			.collect::<Result<Vec<f64>>>()?;
		Self::new(values)
	}

	/// Encodes the values as a JSON array of numbers, in order.
	#[must_use]
	pub fn encode(&self) -> Value {
		Value::Array(self.0.iter().copied().map(Value::from).collect())
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.0.get(2).copied()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always false, a position holds at least two values.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<f64> {
		self.0.get(index).copied()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<f64> {
		self.0
	}

	/// Returns a copy with the value at `index` replaced.
	pub fn replace(&self, index: usize, value: f64) -> Result<Self> {
		let mut values = self.0.clone();
		let length = values.len();
		let slot = values
			.get_mut(index)
			.ok_or_else(|| anyhow!("index {index} is out of bounds for length {length}"))?;
		*slot = value;
		Ok(Self(values))
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl TryFrom<Vec<f64>> for Position {
	type Error = anyhow::Error;

	fn try_from(values: Vec<f64>) -> Result<Self> {
		Self::new(values)
	}
}

impl From<[f64; 2]> for Position {
	fn from(value: [f64; 2]) -> Self {
		Self(value.to_vec())
	}
}

impl From<[f64; 3]> for Position {
	fn from(value: [f64; 3]) -> Self {
		Self(value.to_vec())
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Self(vec![value.0, value.1])
	}
}
