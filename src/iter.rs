//! Node views and iterators for the `RedBlackTree` data structure
use crate::config::TraversalOrder;
use crate::node::{Arena, Color, NodeId, NIL};
use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;

/// Inline capacity of the traversal stack. A tree of height 32 already
/// holds at least 2^16 - 1 values, so most walks never touch the heap.
const STACK_INLINE: usize = 32;

type Stack = SmallVec<[NodeId; STACK_INLINE]>;

// ---------------------------------------------------------------------------
// NodeRef
// ---------------------------------------------------------------------------

/// A borrowed view of one node in a tree.
///
/// `NodeRef`s are returned by [`search`](crate::RedBlackTree::search) and by
/// the tree's iterators. They borrow the tree, so the tree cannot be mutated
/// while one is alive.
pub struct NodeRef<'a, T> {
	arena: &'a Arena<T>,
	id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
	pub(crate) fn new(arena: &'a Arena<T>, id: NodeId) -> Option<Self> {
		if id.is_nil() {
			None
		} else {
			Some(NodeRef {
				arena,
				id,
			})
		}
	}

	/// The stored value.
	pub fn value(&self) -> &'a T {
		self.arena.value(self.id)
	}

	/// The node's colour.
	pub fn color(&self) -> Color {
		self.arena.color(self.id)
	}

	/// Whether the node is red.
	pub fn is_red(&self) -> bool {
		self.arena.is_red(self.id)
	}

	/// Whether the node is black.
	pub fn is_black(&self) -> bool {
		self.arena.is_black(self.id)
	}

	/// The parent node, or `None` for the root.
	pub fn parent(&self) -> Option<NodeRef<'a, T>> {
		NodeRef::new(self.arena, self.arena.parent(self.id))
	}

	/// The left child, if any.
	pub fn left(&self) -> Option<NodeRef<'a, T>> {
		NodeRef::new(self.arena, self.arena.left(self.id))
	}

	/// The right child, if any.
	pub fn right(&self) -> Option<NodeRef<'a, T>> {
		NodeRef::new(self.arena, self.arena.right(self.id))
	}
}

impl<T> Clone for NodeRef<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.arena, other.arena) && self.id == other.id
	}
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NodeRef").field("value", self.value()).field("color", &self.color()).finish()
	}
}

// ---------------------------------------------------------------------------
// Iter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Walk {
	/// Pending nodes; the top is yielded next, its children pushed after it.
	Pre {
		stack: Stack,
	},
	/// Left spine of the unvisited part of the tree.
	In {
		stack: Stack,
		current: NodeId,
	},
	/// Ancestors whose right subtree is still being walked.
	Post {
		stack: Stack,
		current: NodeId,
		last: NodeId,
	},
}

/// Lazy iterator over the nodes of a tree.
///
/// Walks with an explicit stack in the tree's configured
/// [`TraversalOrder`]. Every call to `iter()` starts a fresh walk from the
/// current root.
pub struct Iter<'a, T> {
	arena: &'a Arena<T>,
	walk: Walk,
	remaining: usize,
}

impl<'a, T> Iter<'a, T> {
	pub(crate) fn new(arena: &'a Arena<T>, root: NodeId, len: usize, order: TraversalOrder) -> Self {
		let walk = match order {
			TraversalOrder::PreOrder => {
				let mut stack = Stack::new();
				if !root.is_nil() {
					stack.push(root);
				}
				Walk::Pre {
					stack,
				}
			}
			TraversalOrder::InOrder => Walk::In {
				stack: Stack::new(),
				current: root,
			},
			TraversalOrder::PostOrder => Walk::Post {
				stack: Stack::new(),
				current: root,
				last: NIL,
			},
		};
		Iter {
			arena,
			walk,
			remaining: len,
		}
	}

	fn next_id(&mut self) -> Option<NodeId> {
		let arena = self.arena;
		match &mut self.walk {
			Walk::Pre {
				stack,
			} => {
				let id = stack.pop()?;
				let (left, right) = (arena.left(id), arena.right(id));
				if !right.is_nil() {
					stack.push(right);
				}
				if !left.is_nil() {
					stack.push(left);
				}
				Some(id)
			}
			Walk::In {
				stack,
				current,
			} => {
				while !current.is_nil() {
					stack.push(*current);
					*current = arena.left(*current);
				}
				let id = stack.pop()?;
				*current = arena.right(id);
				Some(id)
			}
			Walk::Post {
				stack,
				current,
				last,
			} => loop {
				while !current.is_nil() {
					stack.push(*current);
					*current = arena.left(*current);
				}
				let top = *stack.last()?;
				let right = arena.right(top);
				if !right.is_nil() && right != *last {
					*current = right;
				} else {
					stack.pop();
					*last = top;
					return Some(top);
				}
			},
		}
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = NodeRef<'a, T>;

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.next_id()?;
		self.remaining = self.remaining.saturating_sub(1);
		NodeRef::new(self.arena, id)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Iter {
			arena: self.arena,
			walk: self.walk.clone(),
			remaining: self.remaining,
		}
	}
}

impl<T> fmt::Debug for Iter<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Iter").field("walk", &self.walk).field("remaining", &self.remaining).finish()
	}
}

/// Iterator over the stored values, in the tree's traversal order.
#[derive(Clone, Debug)]
pub struct Values<'a, T> {
	inner: Iter<'a, T>,
}

impl<'a, T> Values<'a, T> {
	pub(crate) fn new(inner: Iter<'a, T>) -> Self {
		Values {
			inner,
		}
	}
}

impl<'a, T> Iterator for Values<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|node| node.value())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}
