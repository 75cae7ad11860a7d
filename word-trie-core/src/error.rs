use thiserror::Error;

/// Errors returned by the trie.
///
/// Every query on the trie is total and answers with a sentinel instead of
/// failing; only operations that are declared but not built return an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
	/// The named operation exists in the API but has no implementation.
	#[error("`{0}` is not implemented")]
	NotImplemented(&'static str),
}
