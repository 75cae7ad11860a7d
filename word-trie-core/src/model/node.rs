use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a node of the trie.
///
/// A `TrieNode` corresponds to one prefix: the characters read on the edges
/// from the root down to it. It records how many inserted words went
/// through it and how many stopped on it.
///
/// ## Responsibilities:
/// - Own its children, indexed by the next character
/// - Count traversals (`pass_count`) and terminations (`end_count`)
/// - Merge with another node representing the same prefix
///
/// ## Invariants
/// - `pass_count >= end_count`
/// - `pass_count == end_count + sum(child.pass_count)`
/// - Children are enumerated in ascending character order
#[derive(Serialize, Deserialize, Debug, Default)]
pub(crate) struct TrieNode {
	/// Outgoing edges indexed by the next character.
	/// A `BTreeMap` keeps iteration order deterministic: ties and
	/// "first encountered" rules always resolve in character order.
	pub(crate) children: BTreeMap<char, TrieNode>,
	/// Number of insertions whose path went through this node.
	pub(crate) pass_count: u64,
	/// Number of insertions that ended exactly on this node.
	pub(crate) end_count: u64,
}

impl TrieNode {
	/// Creates a new empty node.
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Returns `true` if at least one insertion ended on this node.
	pub(crate) fn is_end_of_word(&self) -> bool {
		self.end_count > 0
	}

	/// Returns the child reached through `next_char`, creating it if needed.
	pub(crate) fn child_or_insert(&mut self, next_char: char) -> &mut TrieNode {
		self.children.entry(next_char).or_insert_with(TrieNode::new)
	}

	/// Follows `path` from this node without creating anything.
	///
	/// Returns `None` as soon as an edge is missing.
	pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
		let mut node = self;
		for c in path.chars() {
			node = node.children.get(&c)?;
		}
		Some(node)
	}

	/// Returns the child character with the highest pass count.
	///
	/// On equal counts the smallest character wins. Returns `None` if the
	/// node has no children.
	pub(crate) fn busiest_child(&self) -> Option<char> {
		let mut best: Option<(char, u64)> = None;
		for (&c, child) in &self.children {
			let better = match best {
				None => true,
				Some((top, count)) => {
					child.pass_count > count || (child.pass_count == count && c < top)
				}
			};
			if better {
				best = Some((c, child.pass_count));
			}
		}
		best.map(|(c, _)| c)
	}

	/// Merges another node into this one.
	///
	/// Both nodes must represent the same prefix. Counts are summed level by
	/// level; children missing here are created empty and then summed like
	/// shared ones.
	///
	/// The walk uses an explicit work list, so deep tries do not grow the
	/// call stack.
	pub(crate) fn merge(&mut self, other: &Self) {
		let mut pending: Vec<(&mut TrieNode, &TrieNode)> = vec![(self, other)];

		while let Some((target, source)) = pending.pop() {
			target.pass_count += source.pass_count;
			target.end_count += source.end_count;

			for next_char in source.children.keys() {
				target.children.entry(*next_char).or_insert_with(TrieNode::new);
			}
			for (next_char, target_child) in target.children.iter_mut() {
				if let Some(source_child) = source.children.get(next_char) {
					pending.push((target_child, source_child));
				}
			}
		}
	}
}

impl Clone for TrieNode {
	// Merging into an empty node copies the subtree without recursion.
	fn clone(&self) -> Self {
		let mut copy = TrieNode::new();
		copy.merge(self);
		copy
	}
}

impl PartialEq for TrieNode {
	fn eq(&self, other: &Self) -> bool {
		let mut pending: Vec<(&TrieNode, &TrieNode)> = vec![(self, other)];

		while let Some((left, right)) = pending.pop() {
			if left.pass_count != right.pass_count
				|| left.end_count != right.end_count
				|| left.children.len() != right.children.len()
			{
				return false;
			}
			for ((left_char, left_child), (right_char, right_child)) in left.children.iter().zip(&right.children) {
				if left_char != right_char {
					return false;
				}
				pending.push((left_child, right_child));
			}
		}
		true
	}
}

impl Eq for TrieNode {}

impl Drop for TrieNode {
	// Unlinks the subtree level by level; the default drop would recurse once
	// per character of the longest word.
	fn drop(&mut self) {
		let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
		while let Some(mut node) = pending.pop() {
			pending.extend(std::mem::take(&mut node.children).into_values());
		}
	}
}

impl fmt::Display for TrieNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "pass, end: {}, {}", self.pass_count, self.end_count)
	}
}

#[cfg(test)]
mod node_tests {
	use super::*;

	fn node(pass_count: u64, end_count: u64) -> TrieNode {
		TrieNode { children: BTreeMap::new(), pass_count, end_count }
	}

	#[test]
	fn busiest_child_prefers_highest_pass_count() {
		let mut root = TrieNode::new();
		root.children.insert('p', node(3, 0));
		root.children.insert('n', node(7, 0));

		assert_eq!(root.busiest_child(), Some('n'));
	}

	#[test]
	fn busiest_child_breaks_ties_alphabetically() {
		let mut root = TrieNode::new();
		root.children.insert('z', node(2, 2));
		root.children.insert('b', node(2, 2));
		root.children.insert('m', node(1, 1));

		assert_eq!(root.busiest_child(), Some('b'));
	}

	#[test]
	fn leaf_has_no_busiest_child() {
		assert_eq!(TrieNode::new().busiest_child(), None);
	}

	#[test]
	fn descend_does_not_create_nodes() {
		let mut root = TrieNode::new();
		root.child_or_insert('a').child_or_insert('b');

		assert!(root.descend("ab").is_some());
		assert!(root.descend("abc").is_none());
		assert!(root.descend("x").is_none());
		assert_eq!(root.children.len(), 1);
		assert!(std::ptr::eq(root.descend("").unwrap(), &root));
	}

	#[test]
	fn merge_sums_shared_prefixes_and_copies_new_ones() {
		let mut left = node(2, 0);
		left.children.insert('a', node(2, 2));

		let mut right = node(3, 0);
		right.children.insert('a', node(1, 1));
		let mut b = node(2, 0);
		b.children.insert('e', node(2, 2));
		right.children.insert('b', b);

		left.merge(&right);

		assert_eq!(left.pass_count, 5);
		assert_eq!(left.children[&'a'], node(3, 3));
		assert_eq!(left.children[&'b'].pass_count, 2);
		assert_eq!(left.children[&'b'].children[&'e'], node(2, 2));
	}

	#[test]
	fn merge_into_empty_node_copies_a_deep_path() {
		let mut deep = TrieNode::new();
		let mut cursor = &mut deep;
		for _ in 0..100_000 {
			cursor.pass_count += 1;
			cursor = cursor.child_or_insert('a');
		}
		cursor.pass_count += 1;
		cursor.end_count += 1;

		let mut empty = TrieNode::new();
		empty.merge(&deep);
		assert_eq!(empty, deep);

		let copy = deep.clone();
		assert_eq!(copy, deep);
	}

	#[test]
	fn nodes_with_different_children_differ() {
		let mut left = node(1, 0);
		left.children.insert('a', node(1, 1));
		let mut right = node(1, 0);
		right.children.insert('b', node(1, 1));

		assert_ne!(left, right);
		assert_eq!(left.clone(), left);
	}

	#[test]
	fn display_shows_both_counts() {
		let n = node(4, 1);
		assert!(n.is_end_of_word());
		assert_eq!(n.to_string(), "pass, end: 4, 1");
	}
}
