//! Node storage for the red-black tree.
//!
//! Every node lives in an [`Arena`] owned by the tree and is addressed by a
//! [`NodeId`]. Slot 0 is the NIL sentinel: it is black, its links all point
//! back at itself, and it is never written. Freed slots are recycled through
//! a free list.

/// Handle to a slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

/// The sentinel standing in for "no child" and "no parent".
pub(crate) const NIL: NodeId = NodeId(0);

impl NodeId {
	#[inline]
	fn index(self) -> usize {
		self.0 as usize
	}

	#[inline]
	pub(crate) fn is_nil(self) -> bool {
		self == NIL
	}
}

/// Node colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
	/// A red node. Never the root, never the parent of another red node.
	Red,
	/// A black node. The sentinel is always black.
	Black,
}

/// Which child of a parent a node is, or which way a rotation turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
	Left,
	Right,
}

impl Side {
	#[inline]
	pub(crate) fn opposite(self) -> Side {
		match self {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
	/// `None` for the sentinel and for vacant slots.
	value: Option<T>,
	color: Color,
	parent: NodeId,
	left: NodeId,
	right: NodeId,
}

impl<T> Node<T> {
	fn sentinel() -> Self {
		Node {
			value: None,
			color: Color::Black,
			parent: NIL,
			left: NIL,
			right: NIL,
		}
	}
}

/// Owning storage for all nodes of one tree.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
	nodes: Vec<Node<T>>,
	free: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Arena<T> {
	pub(crate) fn new() -> Self {
		Arena {
			nodes: vec![Node::sentinel()],
			free: Vec::new(),
		}
	}

	/// Allocates a detached red node holding `value`.
	pub(crate) fn alloc(&mut self, value: T) -> NodeId {
		let node = Node {
			value: Some(value),
			color: Color::Red,
			parent: NIL,
			left: NIL,
			right: NIL,
		};
		match self.free.pop() {
			Some(id) => {
				self.nodes[id.index()] = node;
				id
			}
			None => {
				let id = NodeId(
					u32::try_from(self.nodes.len()).expect("red-black tree exceeded u32::MAX nodes"),
				);
				self.nodes.push(node);
				id
			}
		}
	}

	/// Returns a slot to the free list and hands back its value.
	pub(crate) fn release(&mut self, id: NodeId) -> T {
		debug_assert!(!id.is_nil(), "the sentinel cannot be released");
		let node = std::mem::replace(&mut self.nodes[id.index()], Node::sentinel());
		self.free.push(id);
		node.value.expect("released slot must hold a value")
	}

	/// Drops every node and keeps only the sentinel.
	pub(crate) fn clear(&mut self) {
		self.nodes.truncate(1);
		self.free.clear();
	}

	// -----------------------------------------------------------------------
	// Reads
	// -----------------------------------------------------------------------

	#[inline]
	pub(crate) fn value(&self, id: NodeId) -> &T {
		self.nodes[id.index()].value.as_ref().expect("NIL and vacant slots hold no value")
	}

	#[inline]
	pub(crate) fn color(&self, id: NodeId) -> Color {
		self.nodes[id.index()].color
	}

	#[inline]
	pub(crate) fn is_red(&self, id: NodeId) -> bool {
		self.color(id) == Color::Red
	}

	#[inline]
	pub(crate) fn is_black(&self, id: NodeId) -> bool {
		self.color(id) == Color::Black
	}

	#[inline]
	pub(crate) fn parent(&self, id: NodeId) -> NodeId {
		self.nodes[id.index()].parent
	}

	#[inline]
	pub(crate) fn left(&self, id: NodeId) -> NodeId {
		self.nodes[id.index()].left
	}

	#[inline]
	pub(crate) fn right(&self, id: NodeId) -> NodeId {
		self.nodes[id.index()].right
	}

	#[inline]
	pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
		match side {
			Side::Left => self.left(id),
			Side::Right => self.right(id),
		}
	}

	/// Which side of `parent` the node `id` hangs on.
	///
	/// `id` may be NIL as long as `parent` has exactly one NIL child, which
	/// is always the case for the deficit node during delete fixup.
	#[inline]
	pub(crate) fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
		if self.left(parent) == id {
			Side::Left
		} else {
			Side::Right
		}
	}

	/// Smallest node of the subtree rooted at `id`.
	pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
		while !self.left(id).is_nil() {
			id = self.left(id);
		}
		id
	}

	// -----------------------------------------------------------------------
	// Writes. The sentinel is immutable: link writes to it are a bug, colour
	// writes to it are dropped.
	// -----------------------------------------------------------------------

	#[inline]
	pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
		if !id.is_nil() {
			self.nodes[id.index()].color = color;
		}
	}

	#[inline]
	pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
		debug_assert!(!id.is_nil(), "attempted to link the sentinel");
		self.nodes[id.index()].parent = parent;
	}

	#[inline]
	pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
		debug_assert!(!id.is_nil(), "attempted to link the sentinel");
		let node = &mut self.nodes[id.index()];
		match side {
			Side::Left => node.left = child,
			Side::Right => node.right = child,
		}
	}
}
