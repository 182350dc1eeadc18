#![allow(clippy::module_inception)]

mod collection;
mod feature;

pub use collection::*;
pub use feature::*;
