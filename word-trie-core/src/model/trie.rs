use std::fmt;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::frequency::{FrequencyTable, WordFrequency};
use super::node::TrieNode;
use crate::error::TrieError;

/// Character returned by `Trie::most_likely_next_char` when there is no
/// prediction (unknown prefix or no continuation).
pub const NO_NEXT_CHAR: char = '_';

/// Read-only snapshot of the counters stored on a trie node.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeCounts {
	/// Number of insertions whose word starts with the node's prefix.
	pub pass_count: u64,
	/// Number of insertions of exactly the node's prefix.
	pub end_count: u64,
}

impl fmt::Display for NodeCounts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "pass, end: {}, {}", self.pass_count, self.end_count)
	}
}

/// A prefix tree storing words with traversal statistics.
///
/// Every inserted word increments the pass count of each node on its path
/// (root and terminal node included) and the end count of its terminal
/// node. Predictions are derived from those counts.
///
/// # Responsibilities
/// - Record words, duplicates included
/// - Answer membership queries without mutating the tree
/// - Predict the most likely next character or completed word for a prefix
/// - List every distinct word with its insertion count, alphabetically
///
/// # Invariants
/// - `root.pass_count` is the number of non-empty insertions
/// - A node's `pass_count` is its `end_count` plus the pass counts of its children
/// - Nodes are only ever added, never removed
///
/// # Notes
/// - No normalization is applied: `"Apple"` and `"apple"` are different words.
/// - Queries take `&self` and inserts take `&mut self`; callers sharing a
///   trie across threads need one lock around the whole structure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Trie {
	root: TrieNode,
}

impl Trie {
	/// Creates an empty trie.
	pub fn new() -> Self {
		Self { root: TrieNode::new() }
	}

	/// Inserts a word.
	///
	/// Empty words are ignored. Inserting the same word `k` times leaves its
	/// end count at `k`.
	pub fn insert(&mut self, word: &str) {
		if word.is_empty() {
			return;
		}

		let mut node = &mut self.root;
		for c in word.chars() {
			node.pass_count += 1;
			node = node.child_or_insert(c);
		}
		node.pass_count += 1;
		node.end_count += 1;

		trace!("inserted {:?} ({})", word, node);
	}

	/// Returns `true` if `word` was inserted at least once.
	///
	/// A word that only appears as the prefix of longer insertions is not
	/// contained. The empty word is never contained.
	pub fn contains(&self, word: &str) -> bool {
		if word.is_empty() {
			return false;
		}
		self.root.descend(word).is_some_and(TrieNode::is_end_of_word)
	}

	/// Predicts the character most likely to follow `prefix`.
	///
	/// The child with the highest pass count wins; on equal counts the
	/// smallest character is chosen. Returns `None` if the prefix is unknown
	/// or nothing was ever inserted past it.
	pub fn next_char(&self, prefix: &str) -> Option<char> {
		self.root.descend(prefix)?.busiest_child()
	}

	/// Same as `next_char`, using `NO_NEXT_CHAR` (`'_'`) when there is no
	/// prediction.
	pub fn most_likely_next_char(&self, prefix: &str) -> char {
		self.next_char(prefix).unwrap_or(NO_NEXT_CHAR)
	}

	/// Predicts the most frequent completed word starting with `prefix`.
	///
	/// The subtree below `prefix` is walked depth-first, in ascending
	/// character order. `prefix` itself is a candidate if it was inserted.
	/// The word with the strictly highest end count is kept, so on equal
	/// counts the first word met (the alphabetically smallest) wins.
	///
	/// Returns `None` if the prefix is unknown or no word completes it.
	pub fn next_word(&self, prefix: &str) -> Option<String> {
		let start = self.root.descend(prefix)?;

		let mut best: Option<(String, u64)> = None;
		preorder(prefix, start, |word, node| {
			if !node.is_end_of_word() {
				return;
			}
			if best.as_ref().is_none_or(|(_, count)| node.end_count > *count) {
				best = Some((word.to_owned(), node.end_count));
			}
		});

		best.map(|(word, _)| word)
	}

	/// Same as `next_word`, using an empty string when there is no
	/// prediction.
	pub fn most_likely_next_word(&self, prefix: &str) -> String {
		self.next_word(prefix).unwrap_or_default()
	}

	/// Lists every distinct inserted word with its insertion count.
	///
	/// Entries are in alphabetical (character) order and never have a zero
	/// count. The list is rebuilt on each call.
	pub fn word_frequencies(&self) -> Vec<WordFrequency> {
		let mut frequencies = Vec::new();
		preorder("", &self.root, |word, node| {
			if node.is_end_of_word() {
				frequencies.push(WordFrequency::new(word, node.end_count));
			}
		});
		frequencies
	}

	/// Returns the word frequencies as a printable table.
	///
	/// ```
	/// use word_trie_core::model::trie::Trie;
	///
	/// let trie: Trie = ["dog", "cat", "dog"].into_iter().collect();
	/// assert_eq!(trie.frequency_table().to_string(), "cat: 1\ndog: 2\n");
	/// ```
	pub fn frequency_table(&self) -> FrequencyTable {
		FrequencyTable::new(self.word_frequencies())
	}

	/// Returns the counters of the node reached by `prefix`.
	///
	/// The empty prefix designates the root. Returns `None` if no inserted
	/// word starts with `prefix`.
	pub fn counts(&self, prefix: &str) -> Option<NodeCounts> {
		self.root.descend(prefix).map(|node| NodeCounts {
			pass_count: node.pass_count,
			end_count: node.end_count,
		})
	}

	/// Number of non-empty insertions, duplicates included.
	pub fn total_insertions(&self) -> u64 {
		self.root.pass_count
	}

	/// Number of distinct inserted words.
	pub fn distinct_words(&self) -> usize {
		let mut distinct = 0;
		preorder("", &self.root, |_, node| {
			if node.is_end_of_word() {
				distinct += 1;
			}
		});
		distinct
	}

	/// Returns `true` if nothing was inserted yet.
	pub fn is_empty(&self) -> bool {
		self.root.pass_count == 0
	}

	/// Merges another trie into this one.
	///
	/// The result is the same as inserting again every word of `other`, as
	/// many times as it was inserted there.
	pub fn merge(&mut self, other: &Self) {
		debug!(
			"merging {} insertions into a trie of {} insertions",
			other.total_insertions(),
			self.total_insertions()
		);
		self.root.merge(&other.root);
	}

	/// Generates `n` words by walking the trie at random, weighted by the
	/// pass and end counts.
	///
	/// # Errors
	/// Always returns `TrieError::NotImplemented`.
	pub fn random_text_block(&self, n: usize) -> Result<String, TrieError> {
		warn!("random_text_block({}) called, no implementation available", n);
		Err(TrieError::NotImplemented("random_text_block"))
	}

	/// Returns up to `n` next characters after `prefix`, each with the
	/// percentage of the prefix's continuations going through it.
	///
	/// # Errors
	/// Always returns `TrieError::NotImplemented`.
	pub fn top_n_likely_chars_percent(&self, prefix: &str, n: usize) -> Result<Vec<(char, f64)>, TrieError> {
		warn!("top_n_likely_chars_percent({:?}, {}) called, no implementation available", prefix, n);
		Err(TrieError::NotImplemented("top_n_likely_chars_percent"))
	}

	/// Returns the inserted word closest to `word`.
	///
	/// # Errors
	/// Always returns `TrieError::NotImplemented`.
	pub fn spell_check(&self, word: &str) -> Result<String, TrieError> {
		warn!("spell_check({:?}) called, no implementation available", word);
		Err(TrieError::NotImplemented("spell_check"))
	}
}

impl<S: AsRef<str>> Extend<S> for Trie {
	fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
		for word in words {
			self.insert(word.as_ref());
		}
	}
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
	fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
		let mut trie = Trie::new();
		trie.extend(words);
		trie
	}
}

/// Depth-first, pre-order walk over a subtree, children in ascending
/// character order. Calls `visit` on each node with the word spelled up to it.
///
/// One buffer holds the current word: each stack entry remembers the buffer
/// length of its parent, and the buffer is cut back to it before the edge
/// character is pushed. Uses its own stack, so the depth of the trie does
/// not matter.
fn preorder<'a>(prefix: &str, start: &'a TrieNode, mut visit: impl FnMut(&str, &'a TrieNode)) {
	let mut word = prefix.to_owned();
	let mut stack: Vec<(usize, Option<char>, &'a TrieNode)> = vec![(word.len(), None, start)];

	while let Some((parent_len, edge, node)) = stack.pop() {
		word.truncate(parent_len);
		if let Some(c) = edge {
			word.push(c);
		}

		visit(&word, node);

		// Pushed in reverse so the smallest character is popped first
		let len = word.len();
		for (&c, child) in node.children.iter().rev() {
			stack.push((len, Some(c), child));
		}
	}
}
