//! Construction options for [`RedBlackTree`](crate::RedBlackTree).
//!
//! A tree is configured once, at construction, with two options:
//!
//! - a comparator deciding the order of stored values, and
//! - the [`TraversalOrder`] its iterator walks in.
//!
//! ```
//! use redtree::{RedBlackTree, TraversalOrder};
//!
//! let mut tree = RedBlackTree::builder()
//! 	.compare(|a: &i32, b: &i32| b.cmp(a))
//! 	.traversal_order(TraversalOrder::InOrder)
//! 	.build();
//!
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//! assert_eq!(tree.values().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A total order over `T`.
///
/// Implemented for [`Natural`] and for every `Fn(&T, &T) -> Ordering`.
/// A comparator that is not a total order silently breaks the tree's
/// ordering guarantees.
pub trait Compare<T: ?Sized> {
	/// Compares `a` with `b`.
	fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The default comparator: `T`'s own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
	#[inline]
	fn compare(&self, a: &T, b: &T) -> Ordering {
		a.cmp(b)
	}
}

impl<T: ?Sized, F> Compare<T> for F
where
	F: Fn(&T, &T) -> Ordering,
{
	#[inline]
	fn compare(&self, a: &T, b: &T) -> Ordering {
		self(a, b)
	}
}

/// The order in which a tree's iterator visits nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
	/// Node, then left subtree, then right subtree.
	#[default]
	PreOrder,
	/// Left subtree, node, right subtree. Yields values in ascending order.
	InOrder,
	/// Left subtree, right subtree, then node.
	PostOrder,
}

/// Full set of construction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config<C = Natural> {
	/// How stored values are ordered.
	pub compare: C,
	/// Which order `iter()` walks in.
	pub traversal_order: TraversalOrder,
}

/// Builder for [`RedBlackTree`](crate::RedBlackTree), obtained from
/// [`RedBlackTree::builder`](crate::RedBlackTree::builder).
pub struct Builder<T, C = Natural> {
	config: Config<C>,
	_marker: PhantomData<fn() -> T>,
}

impl<T, C: fmt::Debug> fmt::Debug for Builder<T, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Builder").field("config", &self.config).finish()
	}
}

impl<T> Builder<T, Natural> {
	/// Starts from the default options.
	pub fn new() -> Self {
		Builder {
			config: Config::default(),
			_marker: PhantomData,
		}
	}
}

impl<T> Default for Builder<T, Natural> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, C> Builder<T, C> {
	/// Replaces the comparator.
	pub fn compare<D>(self, compare: D) -> Builder<T, D>
	where
		D: Compare<T>,
	{
		Builder {
			config: Config {
				compare,
				traversal_order: self.config.traversal_order,
			},
			_marker: PhantomData,
		}
	}

	/// Sets the traversal order used by `iter()`.
	pub fn traversal_order(mut self, order: TraversalOrder) -> Self {
		self.config.traversal_order = order;
		self
	}

	/// Returns the accumulated options.
	pub fn config(self) -> Config<C> {
		self.config
	}

	/// Builds an empty tree.
	pub fn build(self) -> crate::RedBlackTree<T, C>
	where
		C: Compare<T>,
	{
		crate::RedBlackTree::with_config(self.config)
	}
}
