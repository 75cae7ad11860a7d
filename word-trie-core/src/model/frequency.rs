use std::fmt;

use serde::{Deserialize, Serialize};

/// A distinct inserted word together with how many times it was inserted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordFrequency {
	/// The word, exactly as it was inserted.
	pub word: String,
	/// Number of insertions of `word` (always >= 1).
	pub count: u64,
}

impl WordFrequency {
	/// Creates an entry for `word` inserted `count` times.
	pub fn new(word: impl Into<String>, count: u64) -> Self {
		Self { word: word.into(), count }
	}
}

impl fmt::Display for WordFrequency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.word, self.count)
	}
}

/// Printable listing of word frequencies, one `word: count` line per entry.
///
/// Returned by `Trie::frequency_table`; the entries are already in
/// alphabetical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
	entries: Vec<WordFrequency>,
}

impl FrequencyTable {
	pub(crate) fn new(entries: Vec<WordFrequency>) -> Self {
		Self { entries }
	}

	/// Returns the listed entries.
	pub fn entries(&self) -> &[WordFrequency] {
		&self.entries
	}
}

impl fmt::Display for FrequencyTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for entry in &self.entries {
			writeln!(f, "{}", entry)?;
		}
		Ok(())
	}
}
