/// Implements [`CompositeTrait`](crate::CompositeTrait), a list-style `Debug`
/// and borrowing iteration for a tuple struct wrapping a `Vec` of children.
///
/// The third argument builds the container from its children and carries
/// the container's validation.
macro_rules! impl_composite {
	($($t:ty, $item:ty, $from_items:expr);* $(;)?) => {$(
		impl $crate::CompositeTrait<$item> for $t {
			fn from_items(items: Vec<$item>) -> anyhow::Result<Self> {
				let from_items: fn(Vec<$item>) -> anyhow::Result<Self> = $from_items;
				from_items(items)
			}
			fn as_vec(&self) -> &Vec<$item> {
				&self.0
			}
			fn into_inner(self) -> Vec<$item> {
				self.0
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}

		impl<'a> IntoIterator for &'a $t {
			type Item = &'a $item;
			type IntoIter = std::slice::Iter<'a, $item>;

			fn into_iter(self) -> Self::IntoIter {
				self.0.iter()
			}
		}
	)*}
}

pub(crate) use impl_composite;
