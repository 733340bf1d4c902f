//! # Error Types for the Red-Black Tree
//!
//! This module defines the error type returned by the fallible tree
//! operations and by the invariant checker.
//!
//! ## Error Handling Strategy
//!
//! The tree never panics during normal operation. A search miss is
//! encoded as `None`, and so is a remove miss through
//! [`RedBlackTree::remove`](crate::RedBlackTree::remove). Callers that
//! want to know *why* nothing was removed use
//! [`RedBlackTree::try_remove`](crate::RedBlackTree::try_remove), which
//! distinguishes an empty tree from a missing value.
//!
//! The remaining variants are produced by
//! [`RedBlackTree::check_invariants`](crate::RedBlackTree::check_invariants).
//! They can only occur when the configured comparator is not a total
//! order, which is a caller contract violation.

use thiserror::Error;

/// Errors that can occur during red-black tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The tree holds no values, so there was nothing to remove.
	#[error("the tree is empty")]
	Empty,

	/// No stored value compares equal to the requested one.
	#[error("value not found")]
	NotFound,

	/// The root node is red.
	#[error("root node is red")]
	RedRoot,

	/// A red node has a red child.
	///
	/// `depth` is the depth of the child, counted from the root at 0.
	#[error("red node has a red child at depth {depth}")]
	RedRedEdge {
		/// Depth of the offending child.
		depth: usize,
	},

	/// Two paths below the same node pass through different numbers of
	/// black nodes.
	#[error("black height mismatch at depth {depth}: left {left}, right {right}")]
	BlackHeightMismatch {
		/// Depth of the node whose subtrees disagree.
		depth: usize,
		/// Black height of the left subtree.
		left: usize,
		/// Black height of the right subtree.
		right: usize,
	},

	/// An in-order walk produced a value that compares less than its
	/// predecessor.
	#[error("in-order walk out of order at position {position}")]
	OrderViolation {
		/// Zero-based position in the in-order sequence.
		position: usize,
	},

	/// A child does not point back at its parent.
	#[error("child at depth {depth} does not link back to its parent")]
	BrokenParentLink {
		/// Depth of the child with the stale parent link.
		depth: usize,
	},

	/// The cached element count differs from the number of reachable nodes.
	#[error("count is {count} but {reachable} nodes are reachable")]
	CountMismatch {
		/// The cached count.
		count: usize,
		/// Nodes actually reachable from the root.
		reachable: usize,
	},
}

/// A Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
