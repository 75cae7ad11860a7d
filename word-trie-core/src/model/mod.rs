//! Top-level module for the word trie.
//!
//! This module provides:
//! - The prefix tree itself (`Trie`)
//! - Word frequency results (`WordFrequency`, `FrequencyTable`)
//! - Internal node storage (`TrieNode`)

/// Prefix tree storing words with pass and end counts.
///
/// Handles insertion, membership, next-character and next-word prediction,
/// frequency listing and merging.
pub mod trie;

/// Word frequency entries and their printable table.
pub mod frequency;

/// Internal representation of a single trie node.
///
/// Owns its children in character order and carries the counters.
/// This module is not exposed publicly.
mod node;
