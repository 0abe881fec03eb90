//! Word and sentence segmentation.

/// Characters that end a sentence when no custom delimiter is given.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Split `text` into whitespace-delimited tokens.
///
/// This is the sole tokenizer: punctuation is kept attached here and only
/// trimmed later during frequency cleaning.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count sentences in `text`.
///
/// With an empty `delimiter`, a maximal run of `.`, `!`, `?` is one
/// boundary; otherwise the delimiter string is matched literally. Either
/// way, only segments that are non-blank after trimming count, so text
/// with content but no boundary is a single sentence. Runs in time linear
/// in the input length.
pub fn count_sentences(text: &str, delimiter: &str) -> usize {
    if delimiter.is_empty() {
        // Splitting on single terminator chars leaves blank fragments
        // between consecutive terminators, so a run like "?!." collapses
        // to one boundary once blanks are dropped.
        text.split(SENTENCE_TERMINATORS)
            .filter(|segment| !segment.trim().is_empty())
            .count()
    } else {
        text.split(delimiter)
            .filter(|segment| !segment.trim().is_empty())
            .count()
    }
}
