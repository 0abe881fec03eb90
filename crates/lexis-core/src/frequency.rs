//! Word cleaning and deterministic frequency ranking.

use std::collections::HashMap;

use crate::WordFrequency;

/// Punctuation trimmed from token edges before counting.
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Lower-case a token and trim edge punctuation.
///
/// Interior punctuation survives: "Don't" cleans to "don't". Returns an
/// empty string for tokens made of punctuation only.
pub fn clean_word(word: &str) -> String {
    word.to_lowercase().trim_matches(EDGE_PUNCTUATION).to_string()
}

/// Rank cleaned words by occurrence and keep the top `limit`.
///
/// Ordered by count descending, ties broken by word ascending in codepoint
/// order, so the result never depends on map iteration order.
pub fn top_words(words: &[&str], limit: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in words {
        let cleaned = clean_word(word);
        if !cleaned.is_empty() {
            *counts.entry(cleaned).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();

    ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(limit);
    ranked
}
