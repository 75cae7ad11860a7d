//! Word prefix tree with traversal statistics.
//!
//! This crate provides a trie that stores words together with per-node
//! counters, including:
//! - Membership queries
//! - Most likely next character and next word for a prefix
//! - Alphabetical word frequency listing
//! - Merging of tries built separately
//!
//! The node representation stays internal; only the `Trie` API and its
//! result types are public.

/// Trie, node counters and frequency listing.
pub mod model;

/// Error type shared by the crate.
pub mod error;

/// Text helpers (splitting a block of text into words).
pub mod text;
