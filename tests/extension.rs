//! # Extension Layer Tests
//!
//! The conveniences in `TreeExt` only use the `OrderedTree` contract. These
//! tests run them against the red-black tree and against a deliberately
//! naive sorted-vector container to show they need nothing else.

use redtree::{OrderedTree, RedBlackTree, TraversalOrder, TreeExt};

// ===========================================================================
// Red-Black Tree
// ===========================================================================

#[test]
fn insert_from_array_inserts_everything() {
	let mut tree: RedBlackTree<i32> =
		RedBlackTree::builder().traversal_order(TraversalOrder::InOrder).build();
	tree.insert_from_array(vec![5, 3, 8, 1, 4, 7, 9, 2, 6]);

	tree.assert_invariants();
	assert_eq!(tree.len(), 9);
	assert_eq!(tree.values().copied().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
}

#[test]
fn to_array_follows_traversal_order() {
	for order in [TraversalOrder::PreOrder, TraversalOrder::InOrder, TraversalOrder::PostOrder] {
		let mut tree: RedBlackTree<i32> = RedBlackTree::builder().traversal_order(order).build();
		tree.insert_from_array(0..50);

		let nodes = tree.to_array();
		assert_eq!(nodes.len(), 50);

		let from_nodes: Vec<i32> = nodes.iter().map(|n| *n.value()).collect();
		let from_iter: Vec<i32> = tree.values().copied().collect();
		assert_eq!(from_nodes, from_iter, "{:?}", order);
	}
}

#[test]
fn first_is_first_of_traversal() {
	let mut pre: RedBlackTree<i32> = RedBlackTree::new();
	assert!(pre.first().is_none());

	pre.insert_from_array([10, 20, 30]);
	// Pre-order starts at the root
	assert_eq!(pre.first().map(|n| *n.value()), Some(20));

	let mut sorted: RedBlackTree<i32> =
		RedBlackTree::builder().traversal_order(TraversalOrder::InOrder).build();
	sorted.insert_from_array([10, 20, 30, 5]);
	assert_eq!(sorted.first().map(|n| *n.value()), Some(5));
}

#[test]
fn to_array_of_empty_tree() {
	let tree: RedBlackTree<u8> = RedBlackTree::new();
	assert!(tree.to_array().is_empty());
}

#[test]
fn contract_methods_delegate_to_tree() {
	fn exercise<X: OrderedTree<i32>>(tree: &mut X) -> usize {
		tree.insert(1);
		tree.insert(2);
		tree.insert(2);
		assert!(tree.search(&2).is_some());
		assert_eq!(tree.remove(&2), Some(2));
		assert_eq!(tree.remove(&42), None);
		tree.count()
	}

	let mut tree: RedBlackTree<i32> = RedBlackTree::new();
	assert_eq!(exercise(&mut tree), 2);
	tree.assert_invariants();
}

// ===========================================================================
// A Second Container
// ===========================================================================

/// Minimal ordered multiset backed by a sorted vector.
#[derive(Default)]
struct SortedVec {
	items: Vec<i32>,
}

impl OrderedTree<i32> for SortedVec {
	type Node<'a> = &'a i32;
	type Iter<'a> = std::slice::Iter<'a, i32>;

	fn insert(&mut self, value: i32) {
		let pos = self.items.partition_point(|v| *v <= value);
		self.items.insert(pos, value);
	}

	fn remove(&mut self, value: &i32) -> Option<i32> {
		let pos = self.items.binary_search(value).ok()?;
		Some(self.items.remove(pos))
	}

	fn search<'a>(&'a self, value: &i32) -> Option<&'a i32> {
		self.items.binary_search(value).ok().map(|pos| &self.items[pos])
	}

	fn count(&self) -> usize {
		self.items.len()
	}

	fn iter<'a>(&'a self) -> std::slice::Iter<'a, i32> {
		self.items.iter()
	}
}

#[test]
fn extension_works_on_any_ordered_tree() {
	let mut list = SortedVec::default();
	assert!(list.first().is_none());

	list.insert_from_array([3, 1, 2]);
	assert_eq!(list.count(), 3);
	assert_eq!(list.first(), Some(&1));
	assert_eq!(list.to_array(), vec![&1, &2, &3]);
}

#[test]
fn both_containers_agree() {
	let input = [9, 4, 7, 1, 8, 2, 2, 6];

	let mut tree: RedBlackTree<i32> =
		RedBlackTree::builder().traversal_order(TraversalOrder::InOrder).build();
	let mut list = SortedVec::default();
	tree.insert_from_array(input);
	list.insert_from_array(input);

	let from_tree: Vec<i32> = tree.to_array().iter().map(|n| *n.value()).collect();
	let from_list: Vec<i32> = list.to_array().into_iter().copied().collect();
	assert_eq!(from_tree, from_list);
	assert_eq!(tree.first().map(|n| *n.value()), list.first().copied());
}
