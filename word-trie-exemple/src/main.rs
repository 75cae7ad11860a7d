use clap::Parser;
use word_trie_core::model::trie::Trie;
use word_trie_core::text::words;

const SAMPLE_BLOCK: &str = "
    apple banana apple apple
    and and and any any
    cat dog dog any any
    apple any banana any
";

/// Loads a block of words into a trie and runs every query on it.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Space separated words to load (lower-cased before insertion)
    #[arg(short, long, default_value = SAMPLE_BLOCK)]
    text: String,

    /// Words checked with `contains`
    #[arg(short = 'k', long, num_args = 1.., default_values = ["apple", "banana", "ban", "zebra"])]
    check: Vec<String>,

    /// Prefixes given to `most_likely_next_char`
    #[arg(short, long, num_args = 1.., default_values = ["a", "ap", "do", "x"])]
    char_prefix: Vec<String>,

    /// Prefixes given to `most_likely_next_word`
    #[arg(short, long, num_args = 1.., default_values = ["a", "ap", "b", "z"])]
    word_prefix: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Load words
    let trie: Trie = words(&cli.text).collect();
    log::info!(
        "loaded {} words ({} distinct)",
        trie.total_insertions(),
        trie.distinct_words()
    );

    println!("---- contains ----");
    for word in &cli.check {
        println!("contains({:?}) --> {}", word, trie.contains(word));
    }

    println!("\n---- mostLikelyNextChar ----");
    for prefix in &cli.char_prefix {
        println!("mostLikelyNextChar({:?}) --> {}", prefix, trie.most_likely_next_char(prefix));
    }

    println!("\n---- mostLikelyNextWord ----");
    for prefix in &cli.word_prefix {
        println!("mostLikelyNextWord({:?}) --> {}", prefix, trie.most_likely_next_word(prefix));
    }

    println!("\n---- wordFrequencies ----");
    print!("{}", trie.frequency_table());

    // Declared but not built yet: show the error instead of a made-up answer
    println!("\n---- not implemented ----");
    if let Err(err) = trie.random_text_block(10) {
        println!("randomTextBlock(10) --> {}", err);
    }
    if let Err(err) = trie.top_n_likely_chars_percent("a", 3) {
        println!("topNLikelyCharsPercent(\"a\", 3) --> {}", err);
    }
    if let Err(err) = trie.spell_check("appel") {
        println!("spellCheck(\"appel\") --> {}", err);
    }

    Ok(())
}
