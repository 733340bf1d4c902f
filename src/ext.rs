//! Conveniences layered on top of the tree's public contract.
//!
//! [`OrderedTree`] captures the base contract of an ordered container:
//! insert, remove, search, count and iterate. [`TreeExt`] is implemented
//! for every `OrderedTree` and adds bulk insertion, materialisation and
//! first-element access using nothing but that contract, so any other
//! container implementing `OrderedTree` gets the same conveniences.
//!
//! ```
//! use redtree::{RedBlackTree, TraversalOrder, TreeExt};
//!
//! let mut tree = RedBlackTree::builder().traversal_order(TraversalOrder::InOrder).build();
//! tree.insert_from_array([3, 1, 2]);
//!
//! let values: Vec<i32> = tree.to_array().iter().map(|n| *n.value()).collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! assert_eq!(tree.first().map(|n| *n.value()), Some(1));
//! ```

use crate::config::Compare;
use crate::iter::{Iter, NodeRef};
use crate::RedBlackTree;

/// The public contract of an ordered container.
pub trait OrderedTree<T> {
	/// Borrowed view of a stored node.
	type Node<'a>
	where
		Self: 'a;

	/// Iterator over nodes in the container's traversal order.
	type Iter<'a>: Iterator<Item = Self::Node<'a>>
	where
		Self: 'a;

	/// Inserts a value.
	fn insert(&mut self, value: T);

	/// Removes one value equal to `value`, returning it if one was stored.
	fn remove(&mut self, value: &T) -> Option<T>;

	/// Finds a node whose value compares equal to `value`.
	fn search<'a>(&'a self, value: &T) -> Option<Self::Node<'a>>;

	/// Number of stored values.
	fn count(&self) -> usize;

	/// Walks the stored nodes.
	fn iter<'a>(&'a self) -> Self::Iter<'a>;
}

impl<T, C: Compare<T>> OrderedTree<T> for RedBlackTree<T, C> {
	type Node<'a>
		= NodeRef<'a, T>
	where
		Self: 'a;

	type Iter<'a>
		= Iter<'a, T>
	where
		Self: 'a;

	fn insert(&mut self, value: T) {
		RedBlackTree::insert(self, value)
	}

	fn remove(&mut self, value: &T) -> Option<T> {
		RedBlackTree::remove(self, value)
	}

	fn search<'a>(&'a self, value: &T) -> Option<NodeRef<'a, T>> {
		RedBlackTree::search(self, value)
	}

	fn count(&self) -> usize {
		self.len()
	}

	fn iter<'a>(&'a self) -> Iter<'a, T> {
		RedBlackTree::iter(self)
	}
}

/// Bulk insertion and materialisation for any [`OrderedTree`].
pub trait TreeExt<T>: OrderedTree<T> {
	/// Inserts every value in order of appearance.
	fn insert_from_array<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
	{
		for value in values {
			self.insert(value);
		}
	}

	/// Collects every node in traversal order.
	fn to_array(&self) -> Vec<Self::Node<'_>> {
		self.iter().collect()
	}

	/// The first node of the traversal order, if any.
	fn first(&self) -> Option<Self::Node<'_>> {
		self.iter().next()
	}
}

impl<T, X: OrderedTree<T> + ?Sized> TreeExt<T> for X {}
