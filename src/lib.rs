//! # Redtree: An In-Memory Red-Black Tree
//!
//! This crate provides an ordered container backed by a red-black tree, a
//! self-balancing binary search tree that guarantees `O(log n)` insert,
//! remove and search regardless of the order values arrive in.
//!
//! ## Design Overview
//!
//! **Arena Storage**: Every node lives in an arena owned by the tree and is
//! addressed by an index handle. Parent, left and right links are plain
//! indices, so the parent back-references create no ownership cycles.
//!
//! **Sentinel**: Slot 0 of the arena is the NIL sentinel. It stands in for
//! every missing child and for the root's parent, is always black, and is
//! never written. Deletion tracks the parent of the node that fills the
//! removed position explicitly instead of parking it on the sentinel.
//!
//! **Rebalancing**: All structural changes funnel through a single
//! rotation primitive and two fixup passes, one after insertion (red-red
//! repair) and one after deletion (black-height deficit repair). Left and
//! right cases are the same code run with the sides swapped.
//!
//! ### Tree Structure
//!
//! ```text
//!                 ┌──────────────┐
//!                 │  20 (black)  │   <- root, always black
//!                 └──────┬───────┘
//!              ┌─────────┴─────────┐
//!              ▼                   ▼
//!       ┌────────────┐      ┌────────────┐
//!       │  10 (red)  │      │  30 (red)  │
//!       └─────┬──────┘      └─────┬──────┘
//!          ┌──┴──┐             ┌──┴──┐
//!          ▼     ▼             ▼     ▼
//!         NIL   NIL           NIL   NIL    <- one shared black sentinel
//! ```
//!
//! ## Basic Usage
//!
//! ```
//! use redtree::{RedBlackTree, TraversalOrder};
//!
//! let mut tree = RedBlackTree::builder().traversal_order(TraversalOrder::InOrder).build();
//!
//! tree.insert(30);
//! tree.insert(10);
//! tree.insert(20);
//!
//! assert!(tree.search(&10).is_some());
//! assert_eq!(tree.values().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
//!
//! assert_eq!(tree.remove(&10), Some(10));
//! assert_eq!(tree.remove(&10), None); // Already removed
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! ## Duplicates
//!
//! The tree is a multiset: inserting a value equal to a stored one adds a
//! second node, routed to the right of the existing one. Use
//! [`RedBlackTree::insert_unique`] for set semantics.
//!
//! ## Thread Safety
//!
//! The tree performs no internal synchronisation. Mutation requires
//! `&mut self`, and iterators borrow the tree, so a traversal can never
//! observe a concurrent modification.

use log::{debug, trace};
use smallvec::SmallVec;

use std::cmp::Ordering;
use std::fmt;

pub mod config;
pub mod error;
pub mod ext;
pub mod iter;
mod node;

pub use config::{Builder, Compare, Config, Natural, TraversalOrder};
pub use error::{Error, Result};
pub use ext::{OrderedTree, TreeExt};
pub use iter::{Iter, NodeRef, Values};
pub use node::Color;

use node::{Arena, NodeId, Side, NIL};

// ---------------------------------------------------------------------------
// Core Tree Structure
// ---------------------------------------------------------------------------

/// An ordered multiset backed by a red-black tree.
///
/// # Type Parameters
///
/// - `T`: The stored value type. Opaque to the tree except through `C`.
/// - `C`: The comparator. Defaults to [`Natural`], which uses `T: Ord`.
///
/// # Invariants
///
/// After every public operation returns:
///
/// 1. An in-order walk yields values in non-decreasing comparator order.
/// 2. The root is black.
/// 3. The sentinel is black.
/// 4. No red node has a red child.
/// 5. Every path from a node down to the sentinel crosses the same number
///    of black nodes.
/// 6. [`len`](Self::len) equals the number of stored values.
#[derive(Clone)]
pub struct RedBlackTree<T, C = Natural> {
	/// Owns every node, sentinel included.
	arena: Arena<T>,

	/// Top of the tree, `NIL` when empty.
	root: NodeId,

	/// Number of live nodes.
	count: usize,

	compare: C,

	traversal_order: TraversalOrder,
}

impl<T: Ord> Default for RedBlackTree<T, Natural> {
	fn default() -> Self {
		Self::new()
	}
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<T> RedBlackTree<T, Natural> {
	/// Starts building a tree with custom options.
	///
	/// Closures passed to [`Builder::compare`] need annotated parameter
	/// types, e.g. `|a: &u32, b: &u32| b.cmp(a)`.
	pub fn builder() -> Builder<T, Natural> {
		Builder::new()
	}
}

impl<T: Ord> RedBlackTree<T, Natural> {
	/// Creates an empty tree ordered by `T: Ord` that iterates in pre-order.
	///
	/// # Example
	///
	/// ```
	/// use redtree::RedBlackTree;
	///
	/// let tree: RedBlackTree<u32> = RedBlackTree::new();
	/// assert!(tree.is_empty());
	/// assert_eq!(tree.height(), 0);
	/// ```
	pub fn new() -> Self {
		Self::with_config(Config::default())
	}
}

impl<T, C: Compare<T>> RedBlackTree<T, C> {
	/// Creates an empty tree from explicit options.
	pub fn with_config(config: Config<C>) -> Self {
		RedBlackTree {
			arena: Arena::new(),
			root: NIL,
			count: 0,
			compare: config.compare,
			traversal_order: config.traversal_order,
		}
	}

	// -----------------------------------------------------------------------
	// Tree Metadata
	// -----------------------------------------------------------------------

	/// Returns the number of stored values.
	pub fn len(&self) -> usize {
		self.count
	}

	/// Returns `true` if the tree holds no values.
	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	/// The order `iter()` walks in, fixed at construction.
	pub fn traversal_order(&self) -> TraversalOrder {
		self.traversal_order
	}

	/// The comparator the tree was built with.
	pub fn comparator(&self) -> &C {
		&self.compare
	}

	/// Returns the number of nodes on the longest root-to-leaf path.
	///
	/// An empty tree has height 0. A valid tree of `n` values never exceeds
	/// `2 * log2(n + 1)`.
	pub fn height(&self) -> usize {
		if self.root.is_nil() {
			return 0;
		}

		let mut max = 0;
		let mut stack: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
		stack.push((self.root, 1));

		while let Some((id, depth)) = stack.pop() {
			max = max.max(depth);
			for child in [self.arena.left(id), self.arena.right(id)] {
				if !child.is_nil() {
					stack.push((child, depth + 1));
				}
			}
		}

		max
	}

	/// Returns the number of black nodes on any path from the root down to
	/// the sentinel, counting the root and not the sentinel.
	pub fn black_height(&self) -> usize {
		let mut height = 0;
		let mut current = self.root;
		while !current.is_nil() {
			if self.arena.is_black(current) {
				height += 1;
			}
			current = self.arena.left(current);
		}
		height
	}

	// -----------------------------------------------------------------------
	// Lookups
	// -----------------------------------------------------------------------

	/// Iterative descent from the root. Returns `NIL` on a miss.
	fn find(&self, value: &T) -> NodeId {
		let mut current = self.root;
		while !current.is_nil() {
			match self.compare.compare(value, self.arena.value(current)) {
				Ordering::Less => current = self.arena.left(current),
				Ordering::Greater => current = self.arena.right(current),
				Ordering::Equal => return current,
			}
		}
		NIL
	}

	/// Finds a node whose value compares equal to `value`.
	///
	/// With duplicates present, the first equal node met on the way down
	/// from the root is returned. Never mutates the tree.
	///
	/// # Example
	///
	/// ```
	/// use redtree::RedBlackTree;
	///
	/// let mut tree = RedBlackTree::new();
	/// tree.insert("b");
	///
	/// assert_eq!(tree.search(&"b").map(|n| *n.value()), Some("b"));
	/// assert!(tree.search(&"a").is_none());
	/// ```
	pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
		NodeRef::new(&self.arena, self.find(value))
	}

	/// Returns `true` if some stored value compares equal to `value`.
	pub fn contains(&self, value: &T) -> bool {
		!self.find(value).is_nil()
	}

	// -----------------------------------------------------------------------
	// Rotation
	// -----------------------------------------------------------------------

	/// Rotates the subtree rooted at `x` towards `side`.
	///
	/// A left rotation promotes `x.right` into `x`'s position and hangs `x`
	/// off its left; the promoted node's former left subtree becomes `x`'s
	/// right subtree. A right rotation is the mirror image. Colours are left
	/// untouched. Does nothing if the child to promote is the sentinel.
	fn rotate(&mut self, x: NodeId, side: Side) {
		let y = self.arena.child(x, side.opposite());
		if y.is_nil() {
			return;
		}
		trace!("rotate {:?} at {:?}", side, x);

		let inner = self.arena.child(y, side);
		self.arena.set_child(x, side.opposite(), inner);
		if !inner.is_nil() {
			self.arena.set_parent(inner, x);
		}

		let parent = self.arena.parent(x);
		self.arena.set_parent(y, parent);
		if parent.is_nil() {
			self.root = y;
		} else {
			let x_side = self.arena.side_of(x, parent);
			self.arena.set_child(parent, x_side, y);
		}

		self.arena.set_child(y, side, x);
		self.arena.set_parent(x, y);
	}

	// -----------------------------------------------------------------------
	// Insertion
	// -----------------------------------------------------------------------

	/// Inserts a value.
	///
	/// Values equal to a stored one are kept as well and placed after it, so
	/// the tree behaves as a multiset.
	///
	/// # Example
	///
	/// ```
	/// use redtree::RedBlackTree;
	///
	/// let mut tree = RedBlackTree::new();
	/// tree.insert(7);
	/// tree.insert(7);
	/// assert_eq!(tree.len(), 2);
	/// ```
	pub fn insert(&mut self, value: T) {
		let mut parent = NIL;
		let mut side = Side::Left;
		let mut current = self.root;

		while !current.is_nil() {
			parent = current;
			side = match self.compare.compare(&value, self.arena.value(current)) {
				Ordering::Less => Side::Left,
				Ordering::Equal | Ordering::Greater => Side::Right,
			};
			current = self.arena.child(current, side);
		}

		let node = self.arena.alloc(value);
		self.arena.set_parent(node, parent);
		if parent.is_nil() {
			self.root = node;
		} else {
			self.arena.set_child(parent, side, node);
		}

		self.count += 1;
		self.fix_insert(node);
	}

	/// Inserts `value` unless an equal value is already stored.
	///
	/// Returns whether the value was inserted.
	pub fn insert_unique(&mut self, value: T) -> bool {
		if self.contains(&value) {
			return false;
		}
		self.insert(value);
		true
	}

	/// Restores the red-black properties after `node` was linked in red.
	///
	/// The only property a fresh red node can break is "no red node has a
	/// red child". The loop pushes the violation upwards until the parent is
	/// black; the root's parent is the sentinel, so it always stops.
	fn fix_insert(&mut self, mut node: NodeId) {
		while self.arena.is_red(self.arena.parent(node)) {
			// A red parent is never the root, so the grandparent is real.
			let parent = self.arena.parent(node);
			let grandparent = self.arena.parent(parent);
			let side = self.arena.side_of(parent, grandparent);
			let uncle = self.arena.child(grandparent, side.opposite());

			if self.arena.is_red(uncle) {
				trace!("insert fixup at {:?}: red uncle, recolouring", node);
				self.arena.set_color(parent, Color::Black);
				self.arena.set_color(uncle, Color::Black);
				self.arena.set_color(grandparent, Color::Red);
				node = grandparent;
				continue;
			}

			if node == self.arena.child(parent, side.opposite()) {
				trace!("insert fixup at {:?}: inner grandchild", node);
				node = parent;
				self.rotate(node, side);
			}

			trace!("insert fixup at {:?}: outer grandchild", node);
			let parent = self.arena.parent(node);
			let grandparent = self.arena.parent(parent);
			self.arena.set_color(parent, Color::Black);
			self.arena.set_color(grandparent, Color::Red);
			self.rotate(grandparent, side.opposite());
		}

		self.arena.set_color(self.root, Color::Black);
	}

	// -----------------------------------------------------------------------
	// Deletion
	// -----------------------------------------------------------------------

	/// Removes one value equal to `value` and returns it.
	///
	/// Returns `None`, leaving the tree untouched, if no stored value
	/// compares equal.
	///
	/// # Example
	///
	/// ```
	/// use redtree::RedBlackTree;
	///
	/// let mut tree = RedBlackTree::new();
	/// tree.insert(1);
	///
	/// assert_eq!(tree.remove(&1), Some(1));
	/// assert_eq!(tree.remove(&1), None);
	/// assert_eq!(tree.len(), 0);
	/// ```
	pub fn remove(&mut self, value: &T) -> Option<T> {
		let node = self.find(value);
		if node.is_nil() {
			debug!("remove: no matching value among {} nodes, nothing removed", self.count);
			return None;
		}
		Some(self.remove_node(node))
	}

	/// Like [`remove`](Self::remove), but says why nothing was removed.
	///
	/// # Errors
	///
	/// - [`Error::Empty`] if the tree holds no values.
	/// - [`Error::NotFound`] if no stored value compares equal to `value`.
	pub fn try_remove(&mut self, value: &T) -> Result<T> {
		if self.is_empty() {
			return Err(Error::Empty);
		}
		self.remove(value).ok_or(Error::NotFound)
	}

	/// Replaces the subtree rooted at `old` with the one rooted at `new` in
	/// `old`'s parent. `new` may be the sentinel, whose parent is not set.
	fn transplant(&mut self, old: NodeId, new: NodeId) {
		let parent = self.arena.parent(old);
		if parent.is_nil() {
			self.root = new;
		} else {
			let side = self.arena.side_of(old, parent);
			self.arena.set_child(parent, side, new);
		}
		if !new.is_nil() {
			self.arena.set_parent(new, parent);
		}
	}

	/// Unlinks `z`, rebalances, and hands back its value.
	fn remove_node(&mut self, z: NodeId) -> T {
		let left = self.arena.left(z);
		let right = self.arena.right(z);

		// Colour of the node that actually leaves its position.
		let mut spliced_color = self.arena.color(z);
		// The node (possibly NIL) that takes that position, and its parent.
		let x;
		let x_parent;

		if left.is_nil() {
			x = right;
			x_parent = self.arena.parent(z);
			self.transplant(z, right);
		} else if right.is_nil() {
			x = left;
			x_parent = self.arena.parent(z);
			self.transplant(z, left);
		} else {
			// Two children: the in-order successor takes z's place.
			let y = self.arena.minimum(right);
			spliced_color = self.arena.color(y);
			x = self.arena.right(y);

			if self.arena.parent(y) == z {
				x_parent = y;
			} else {
				x_parent = self.arena.parent(y);
				self.transplant(y, x);
				self.arena.set_child(y, Side::Right, right);
				self.arena.set_parent(right, y);
			}

			self.transplant(z, y);
			self.arena.set_child(y, Side::Left, left);
			self.arena.set_parent(left, y);
			let z_color = self.arena.color(z);
			self.arena.set_color(y, z_color);
		}

		self.count -= 1;

		if spliced_color == Color::Black {
			self.fix_remove(x, x_parent);
		}

		self.arena.release(z)
	}

	/// Repairs the black-height deficit left at `node` after a black node
	/// was spliced out.
	///
	/// `parent` is `node`'s parent. It is passed explicitly because `node`
	/// may be the sentinel, which does not record a parent.
	fn fix_remove(&mut self, mut node: NodeId, mut parent: NodeId) {
		while node != self.root && self.arena.is_black(node) {
			let side = self.arena.side_of(node, parent);
			let far_side = side.opposite();
			// The deficit guarantees a real sibling.
			let mut sibling = self.arena.child(parent, far_side);

			if self.arena.is_red(sibling) {
				trace!("remove fixup at {:?}: red sibling", parent);
				self.arena.set_color(sibling, Color::Black);
				self.arena.set_color(parent, Color::Red);
				self.rotate(parent, side);
				sibling = self.arena.child(parent, far_side);
			}

			let near = self.arena.child(sibling, side);
			let far = self.arena.child(sibling, far_side);

			if self.arena.is_black(near) && self.arena.is_black(far) {
				trace!("remove fixup at {:?}: black nephews, moving deficit up", parent);
				self.arena.set_color(sibling, Color::Red);
				node = parent;
				parent = self.arena.parent(node);
				continue;
			}

			if self.arena.is_black(far) {
				trace!("remove fixup at {:?}: red near nephew", parent);
				self.arena.set_color(near, Color::Black);
				self.arena.set_color(sibling, Color::Red);
				self.rotate(sibling, far_side);
				sibling = self.arena.child(parent, far_side);
			}

			trace!("remove fixup at {:?}: red far nephew", parent);
			let parent_color = self.arena.color(parent);
			self.arena.set_color(sibling, parent_color);
			self.arena.set_color(parent, Color::Black);
			let far = self.arena.child(sibling, far_side);
			self.arena.set_color(far, Color::Black);
			self.rotate(parent, side);
			node = self.root;
			break;
		}

		self.arena.set_color(node, Color::Black);
	}

	/// Removes every value.
	pub fn clear(&mut self) {
		debug!("clear: dropping {} nodes", self.count);
		self.arena.clear();
		self.root = NIL;
		self.count = 0;
	}

	// -----------------------------------------------------------------------
	// Iteration
	// -----------------------------------------------------------------------

	/// Returns a lazy iterator over the nodes in the configured
	/// [`TraversalOrder`].
	///
	/// Each call starts a fresh walk from the current root.
	pub fn iter(&self) -> Iter<'_, T> {
		Iter::new(&self.arena, self.root, self.count, self.traversal_order)
	}

	/// Returns the stored values in the configured traversal order.
	pub fn values(&self) -> Values<'_, T> {
		Values::new(self.iter())
	}

	fn in_order(&self) -> Iter<'_, T> {
		Iter::new(&self.arena, self.root, self.count, TraversalOrder::InOrder)
	}

	// -----------------------------------------------------------------------
	// Validation
	// -----------------------------------------------------------------------

	/// Checks every red-black invariant and returns the tree's black
	/// height (as reported by [`black_height`](Self::black_height)).
	///
	/// # Errors
	///
	/// Returns the first violation found. On a tree only mutated through
	/// this API this can only happen if the comparator is not a total
	/// order.
	pub fn check_invariants(&self) -> Result<usize> {
		if self.arena.is_red(self.root) {
			return Err(Error::RedRoot);
		}
		if !self.root.is_nil() && !self.arena.parent(self.root).is_nil() {
			return Err(Error::BrokenParentLink {
				depth: 0,
			});
		}

		let height = self.check_subtree(self.root, 0)?;

		let mut reachable = 0;
		let mut prev: Option<&T> = None;
		for node in self.in_order() {
			let value = node.value();
			if let Some(prev) = prev {
				if self.compare.compare(prev, value) == Ordering::Greater {
					return Err(Error::OrderViolation {
						position: reachable,
					});
				}
			}
			prev = Some(value);
			reachable += 1;
		}

		if reachable != self.count {
			return Err(Error::CountMismatch {
				count: self.count,
				reachable,
			});
		}

		Ok(height)
	}

	/// Returns the black height of the subtree at `id`, counting `id`.
	fn check_subtree(&self, id: NodeId, depth: usize) -> Result<usize> {
		if id.is_nil() {
			return Ok(0);
		}

		let left = self.arena.left(id);
		let right = self.arena.right(id);

		for child in [left, right] {
			if child.is_nil() {
				continue;
			}
			if self.arena.parent(child) != id {
				return Err(Error::BrokenParentLink {
					depth: depth + 1,
				});
			}
			if self.arena.is_red(id) && self.arena.is_red(child) {
				return Err(Error::RedRedEdge {
					depth: depth + 1,
				});
			}
		}

		let left_height = self.check_subtree(left, depth + 1)?;
		let right_height = self.check_subtree(right, depth + 1)?;
		if left_height != right_height {
			return Err(Error::BlackHeightMismatch {
				depth,
				left: left_height,
				right: right_height,
			});
		}

		Ok(left_height + usize::from(self.arena.is_black(id)))
	}
}

// ---------------------------------------------------------------------------
// Trait Implementations
// ---------------------------------------------------------------------------

impl<'a, T, C: Compare<T>> IntoIterator for &'a RedBlackTree<T, C> {
	type Item = NodeRef<'a, T>;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T, C: Compare<T>> Extend<T> for RedBlackTree<T, C> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.insert(value);
		}
	}
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T, Natural> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut tree = RedBlackTree::new();
		tree.extend(iter);
		tree
	}
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for RedBlackTree<T, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.in_order().map(|node| node.value())).finish()
	}
}

/// Prints the tree shape, one node per line with its colour.
///
/// ```text
/// black 20
///   L=red 10
///     L=∅
///     R=∅
///   R=red 30
///     L=∅
///     R=∅
/// ```
impl<T: fmt::Display, C> fmt::Display for RedBlackTree<T, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt_subtree(&self.arena, self.root, "", f)
	}
}

fn fmt_subtree<T: fmt::Display>(
	arena: &Arena<T>,
	id: NodeId,
	tab: &str,
	f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
	if id.is_nil() {
		return f.write_str("∅");
	}

	let color = match arena.color(id) {
		Color::Red => "red",
		Color::Black => "black",
	};
	write!(f, "{} {}", color, arena.value(id))?;

	let child_tab = format!("{tab}  ");
	write!(f, "\n{child_tab}L=")?;
	fmt_subtree(arena, arena.left(id), &child_tab, f)?;
	write!(f, "\n{child_tab}R=")?;
	fmt_subtree(arena, arena.right(id), &child_tab, f)
}

// ===========================================================================
// Test-Only Validation Module
// ===========================================================================

#[cfg(any(test, feature = "test-utils"))]
impl<T: fmt::Debug, C: Compare<T>> RedBlackTree<T, C> {
	/// Validates all tree invariants. Panics with diagnostic info if any
	/// invariant is violated.
	///
	/// Call this after operations in tests to verify the tree keeps its
	/// structural integrity.
	pub fn assert_invariants(&self) {
		if let Err(err) = self.check_invariants() {
			panic!("red-black invariant violated: {err}\ntree: {self:?}");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn in_order<T: Copy, C: Compare<T>>(tree: &RedBlackTree<T, C>) -> Vec<T> {
		tree.in_order().map(|node| *node.value()).collect()
	}

	// -----------------------------------------------------------------------
	// Basic Tree Operation Tests
	// -----------------------------------------------------------------------

	#[test]
	fn basic_insert_and_search() {
		let mut tree = RedBlackTree::new();

		tree.insert(1);
		tree.insert(2);
		tree.insert(3);

		tree.assert_invariants();

		assert_eq!(tree.search(&1).map(|n| *n.value()), Some(1));
		assert_eq!(tree.search(&2).map(|n| *n.value()), Some(2));
		assert_eq!(tree.search(&3).map(|n| *n.value()), Some(3));
		assert!(tree.search(&4).is_none());
	}

	#[test]
	fn three_ascending_inserts_rotate_at_root() {
		let mut tree = RedBlackTree::new();
		for v in [10, 20, 30] {
			tree.insert(v);
		}

		tree.assert_invariants();

		let root = tree.iter().next().unwrap();
		assert_eq!(*root.value(), 20);
		assert!(root.is_black());
		assert!(root.parent().is_none());

		let left = root.left().unwrap();
		let right = root.right().unwrap();
		assert_eq!((*left.value(), left.color()), (10, Color::Red));
		assert_eq!((*right.value(), right.color()), (30, Color::Red));
		assert_eq!(left.parent(), Some(root));

		assert_eq!(in_order(&tree), vec![10, 20, 30]);
	}

	#[test]
	fn remove_smallest_of_seven() {
		let mut tree: RedBlackTree<i32> = (1..=7).collect();
		tree.assert_invariants();

		assert_eq!(tree.remove(&1), Some(1));

		tree.assert_invariants();
		assert_eq!(in_order(&tree), vec![2, 3, 4, 5, 6, 7]);
		assert_eq!(tree.len(), 6);
	}

	#[test]
	fn remove_missing_is_a_noop() {
		let mut tree: RedBlackTree<i32> = (0..10).collect();

		assert_eq!(tree.remove(&42), None);
		assert_eq!(tree.len(), 10);
		assert_eq!(tree.try_remove(&42), Err(Error::NotFound));
		assert_eq!(tree.len(), 10);

		tree.assert_invariants();
	}

	#[test]
	fn remove_from_empty_is_a_noop() {
		let mut tree: RedBlackTree<i32> = RedBlackTree::new();

		assert_eq!(tree.remove(&1), None);
		assert_eq!(tree.try_remove(&1), Err(Error::Empty));
		assert_eq!(tree.len(), 0);

		tree.assert_invariants();
	}

	#[test]
	fn remove_root_of_single_node_tree() {
		let mut tree = RedBlackTree::new();
		tree.insert(5);
		assert_eq!(tree.remove(&5), Some(5));

		assert!(tree.is_empty());
		assert_eq!(tree.root, NIL);
		tree.assert_invariants();
	}

	#[test]
	fn remove_node_with_two_children() {
		let mut tree: RedBlackTree<i32> = (1..=15).collect();

		let root = *tree.iter().next().unwrap().value();
		assert_eq!(tree.remove(&root), Some(root));

		tree.assert_invariants();
		let expected: Vec<i32> = (1..=15).filter(|v| *v != root).collect();
		assert_eq!(in_order(&tree), expected);
	}

	#[test]
	fn len_and_is_empty() {
		let mut tree = RedBlackTree::new();

		assert!(tree.is_empty());
		assert_eq!(tree.len(), 0);

		tree.insert(1);
		assert!(!tree.is_empty());
		assert_eq!(tree.len(), 1);

		tree.insert(2);
		assert_eq!(tree.len(), 2);

		tree.remove(&1);
		assert_eq!(tree.len(), 1);

		tree.assert_invariants();
	}

	#[test]
	fn clear_resets_tree() {
		let mut tree: RedBlackTree<i32> = (0..100).collect();
		tree.clear();

		assert!(tree.is_empty());
		assert_eq!(tree.height(), 0);
		assert_eq!(tree.iter().count(), 0);
		tree.assert_invariants();

		tree.insert(3);
		assert_eq!(in_order(&tree), vec![3]);
	}

	// -----------------------------------------------------------------------
	// Duplicates
	// -----------------------------------------------------------------------

	#[test]
	fn duplicates_are_kept() {
		let mut tree = RedBlackTree::new();
		for v in [5, 5, 5, 3, 5] {
			tree.insert(v);
		}

		tree.assert_invariants();
		assert_eq!(tree.len(), 5);
		assert_eq!(in_order(&tree), vec![3, 5, 5, 5, 5]);

		assert_eq!(tree.remove(&5), Some(5));
		assert_eq!(tree.remove(&5), Some(5));
		tree.assert_invariants();
		assert_eq!(in_order(&tree), vec![3, 5, 5]);
	}

	#[test]
	fn insert_unique_rejects_equal_values() {
		let mut tree = RedBlackTree::new();
		assert!(tree.insert_unique(1));
		assert!(!tree.insert_unique(1));
		assert_eq!(tree.len(), 1);
	}

	// -----------------------------------------------------------------------
	// Rotation Tests
	// -----------------------------------------------------------------------

	#[test]
	fn rotation_without_child_is_a_noop() {
		let mut tree = RedBlackTree::new();
		tree.insert(1);
		let root = tree.root;

		tree.rotate(root, Side::Left);
		tree.rotate(root, Side::Right);

		assert_eq!(tree.root, root);
		tree.assert_invariants();
	}

	#[test]
	fn rotations_preserve_order_and_links() {
		let mut tree: RedBlackTree<i32> = (1..=7).collect();
		let before = in_order(&tree);

		let root = tree.root;
		tree.rotate(root, Side::Left);
		assert_ne!(tree.root, root);
		assert_eq!(tree.arena.left(tree.root), root);
		assert_eq!(tree.arena.parent(root), tree.root);
		assert_eq!(in_order(&tree), before);

		tree.rotate(tree.root, Side::Right);
		assert_eq!(tree.root, root);
		assert_eq!(in_order(&tree), before);
		tree.assert_invariants();
	}

	// -----------------------------------------------------------------------
	// Metadata
	// -----------------------------------------------------------------------

	#[test]
	fn height_is_logarithmic() {
		let tree: RedBlackTree<u32> = (0..1023).collect();
		tree.assert_invariants();

		// 2 * log2(1024)
		assert!(tree.height() <= 20, "height {} too large", tree.height());
		assert!(tree.height() >= 10);
	}

	#[test]
	fn black_height_matches_checker() {
		let tree: RedBlackTree<u32> = (0..500).collect();
		assert_eq!(tree.check_invariants(), Ok(tree.black_height()));
	}

	// -----------------------------------------------------------------------
	// Invariant Checker
	// -----------------------------------------------------------------------

	#[test]
	fn checker_detects_red_root() {
		let mut tree: RedBlackTree<i32> = (0..3).collect();
		let root = tree.root;
		tree.arena.set_color(root, Color::Red);
		assert_eq!(tree.check_invariants(), Err(Error::RedRoot));
	}

	#[test]
	fn checker_detects_red_red_edge() {
		let mut tree: RedBlackTree<i32> = (0..3).collect();
		let left = tree.arena.left(tree.root);
		let extra = tree.arena.alloc(-1);
		tree.arena.set_child(left, Side::Left, extra);
		tree.arena.set_parent(extra, left);
		tree.count += 1;
		assert_eq!(
			tree.check_invariants(),
			Err(Error::RedRedEdge {
				depth: 2
			})
		);
	}

	#[test]
	fn checker_detects_black_height_mismatch() {
		let mut tree: RedBlackTree<i32> = (0..3).collect();
		let left = tree.arena.left(tree.root);
		tree.arena.set_color(left, Color::Black);
		assert!(matches!(tree.check_invariants(), Err(Error::BlackHeightMismatch { .. })));
	}

	#[test]
	fn checker_detects_order_violation() {
		fn ascending(a: &i32, b: &i32) -> Ordering {
			a.cmp(b)
		}
		fn descending(a: &i32, b: &i32) -> Ordering {
			b.cmp(a)
		}

		let mut tree =
			RedBlackTree::builder().compare(ascending as fn(&i32, &i32) -> Ordering).build();
		for v in [1, 2, 3] {
			tree.insert(v);
		}
		tree.compare = descending;
		assert!(matches!(tree.check_invariants(), Err(Error::OrderViolation { .. })));
	}

	// -----------------------------------------------------------------------
	// Formatting
	// -----------------------------------------------------------------------

	#[test]
	fn display_dumps_shape() {
		let tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
		let dump = tree.to_string();
		assert_eq!(dump, "black 20\n  L=red 10\n    L=∅\n    R=∅\n  R=red 30\n    L=∅\n    R=∅");

		let empty: RedBlackTree<i32> = RedBlackTree::new();
		assert_eq!(empty.to_string(), "∅");
	}

	#[test]
	fn debug_lists_values_in_order() {
		let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
		assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
	}

	#[test]
	fn clone_is_independent() {
		let mut a: RedBlackTree<i32> = (0..10).collect();
		let b = a.clone();
		a.remove(&5);
		assert_eq!(a.len(), 9);
		assert_eq!(b.len(), 10);
		assert!(b.contains(&5));
		b.assert_invariants();
	}
}
