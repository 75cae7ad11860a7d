/// Splits a block of text into lower-cased words.
///
/// - Splits on any Unicode whitespace (spaces, tabs, new lines)
/// - Lower-cases each word, so `"Apple"` and `"apple"` count as one
/// - Never yields an empty word
///
/// The trie itself does not normalize anything; this is the preparation a
/// caller does before inserting a block of free text.
pub fn words(block: &str) -> impl Iterator<Item = String> + '_ {
	block.split_whitespace().map(str::to_lowercase)
}
