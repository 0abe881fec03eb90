pub mod frequency;
pub mod reading;
pub mod segment;

use serde::{Deserialize, Serialize};

pub use reading::{Locale, ReadingSpeedModel};

/// One entry in the most-frequent-words ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Statistics computed for a single input text.
///
/// `char_count` counts Unicode code points, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub frequent_words: Vec<WordFrequency>,
    pub reading_time: String,
}

/// How many entries the frequency ranking returns.
const TOP_WORDS: usize = 2;

/// Text statistics engine.
///
/// Construct once from configuration and share across request handlers;
/// `analyze` is a pure function over its input and holds no state between
/// calls.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    locale: Locale,
    speed: ReadingSpeedModel,
}

impl TextAnalyzer {
    pub fn new(locale: Locale, speed: ReadingSpeedModel) -> Self {
        Self { locale, speed }
    }

    /// Compute statistics for `text`.
    ///
    /// An empty `delimiter` selects the default sentence boundaries
    /// (`.`, `!`, `?`); any other string is matched literally. Total over
    /// all inputs: the empty string yields all-zero counts and the
    /// zero-minutes reading time.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str, delimiter: &str) -> AnalysisResult {
        let char_count = text.chars().count();
        let words = segment::words(text);
        let sentence_count = segment::count_sentences(text, delimiter);
        let frequent_words = frequency::top_words(&words, TOP_WORDS);
        let reading_time = reading::estimate(self.speed, self.locale, words.len(), char_count);

        AnalysisResult {
            char_count,
            word_count: words.len(),
            sentence_count,
            frequent_words,
            reading_time,
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Locale::Ru, ReadingSpeedModel::Adaptive)
    }
}
