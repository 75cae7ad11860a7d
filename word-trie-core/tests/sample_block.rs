use word_trie_core::model::frequency::WordFrequency;
use word_trie_core::model::trie::{NO_NEXT_CHAR, Trie};
use word_trie_core::text::words;

const SAMPLE: &str = "
	apple banana apple apple
	and and and any any
	cat dog dog any any
	apple any banana any
";

// apple x4, and x3, any x6, cat x1, dog x2, banana x2
fn load() -> Trie {
	words(SAMPLE).collect()
}

#[test]
fn sample_block_is_fully_loaded() {
	let trie = load();

	assert_eq!(trie.total_insertions(), 18);
	assert_eq!(trie.distinct_words(), 6);
}

#[test]
fn sample_block_contains() {
	let trie = load();

	assert!(trie.contains("apple"));
	assert!(trie.contains("banana"));
	assert!(!trie.contains("ban"));
	assert!(!trie.contains("zebra"));
}

#[test]
fn sample_block_next_char() {
	let trie = load();

	assert_eq!(trie.most_likely_next_char("a"), 'n');
	assert_eq!(trie.most_likely_next_char("ap"), 'p');
	assert_eq!(trie.most_likely_next_char("do"), 'g');
	assert_eq!(trie.most_likely_next_char("x"), NO_NEXT_CHAR);
}

#[test]
fn sample_block_next_word() {
	let trie = load();

	assert_eq!(trie.most_likely_next_word("a"), "any");
	assert_eq!(trie.most_likely_next_word("an"), "any");
	assert_eq!(trie.most_likely_next_word("ap"), "apple");
	assert_eq!(trie.most_likely_next_word("b"), "banana");
	assert_eq!(trie.most_likely_next_word("z"), "");
}

#[test]
fn sample_block_frequencies() {
	let trie = load();

	let expected: Vec<WordFrequency> = [("and", 3), ("any", 6), ("apple", 4), ("banana", 2), ("cat", 1), ("dog", 2)]
		.into_iter()
		.map(|(word, count)| WordFrequency::new(word, count))
		.collect();
	assert_eq!(trie.word_frequencies(), expected);
	assert_eq!(
		trie.frequency_table().to_string(),
		"and: 3\nany: 6\napple: 4\nbanana: 2\ncat: 1\ndog: 2\n"
	);
}

#[test]
fn listed_multiset_gives_the_same_predictions() {
	let counts = [("apple", 3), ("and", 3), ("any", 4), ("cat", 1), ("dog", 2), ("banana", 2)];
	let trie: Trie = counts
		.into_iter()
		.flat_map(|(word, count)| std::iter::repeat_n(word, count))
		.collect();

	assert_eq!(trie.most_likely_next_char("a"), 'n');
	assert_eq!(trie.most_likely_next_word("an"), "any");
	assert_eq!(
		trie.frequency_table().to_string(),
		"and: 3\nany: 4\napple: 3\nbanana: 2\ncat: 1\ndog: 2\n"
	);
}

#[test]
fn halves_merge_into_the_whole() {
	let all: Vec<String> = words(SAMPLE).collect();
	let (left, right) = all.split_at(all.len() / 2);

	let mut merged: Trie = left.iter().collect();
	merged.merge(&right.iter().collect());

	assert_eq!(merged, load());
}
