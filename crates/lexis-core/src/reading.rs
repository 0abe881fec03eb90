//! Reading-time estimation and locale-aware minute formatting.

use std::fmt;
use std::str::FromStr;

/// Baseline reading speed, in words per minute.
const BASE_WPM: f64 = 200.0;
/// Mean word length the baseline speed assumes.
const MEAN_WORD_LEN: f64 = 5.0;
/// Bounds for the adaptive speed adjustment, in words per minute.
const MIN_WPM: f64 = 100.0;
const MAX_WPM: f64 = 300.0;

/// How reading speed is derived from the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadingSpeedModel {
    /// Constant speed in words per minute.
    Fixed { wpm: f64 },
    /// Baseline speed scaled inversely with mean word length, clamped to
    /// [100, 300] wpm.
    Adaptive,
}

impl ReadingSpeedModel {
    /// Effective speed for a text of `word_count` words and `char_count`
    /// code points. `word_count` must be non-zero.
    pub fn words_per_minute(self, word_count: usize, char_count: usize) -> f64 {
        match self {
            ReadingSpeedModel::Fixed { wpm } => wpm,
            ReadingSpeedModel::Adaptive => {
                let avg_word_len = char_count as f64 / word_count as f64;
                (BASE_WPM * (MEAN_WORD_LEN / avg_word_len)).clamp(MIN_WPM, MAX_WPM)
            }
        }
    }
}

/// Target language for the reading-time label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// Russian, with the three Slavic plural forms of "минута".
    Ru,
    /// English, with the plain singular/plural rendering.
    En,
}

impl Locale {
    fn zero_minutes(self) -> &'static str {
        match self {
            Locale::Ru => "0 минут",
            Locale::En => "0 minutes",
        }
    }

    fn less_than_minute(self) -> &'static str {
        match self {
            Locale::Ru => "меньше минуты",
            Locale::En => "less than a minute",
        }
    }

    fn minutes(self, n: u64) -> String {
        match self {
            Locale::Ru => format!("{n} {}", ru_minute_form(n)),
            Locale::En if n == 1 => "1 minute".to_string(),
            Locale::En => format!("{n} minutes"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

/// Pick the Russian plural form of "минута" for `n`.
///
/// 11–19 always take the genitive plural regardless of the last digit;
/// otherwise the last digit decides.
fn ru_minute_form(n: u64) -> &'static str {
    if (11..=19).contains(&(n % 100)) {
        return "минут";
    }
    match n % 10 {
        1 => "минута",
        2..=4 => "минуты",
        _ => "минут",
    }
}

/// Human-readable reading time for a text of `word_count` words and
/// `char_count` code points.
pub fn estimate(
    model: ReadingSpeedModel,
    locale: Locale,
    word_count: usize,
    char_count: usize,
) -> String {
    if word_count == 0 {
        return locale.zero_minutes().to_string();
    }

    let minutes = word_count as f64 / model.words_per_minute(word_count, char_count);
    if minutes < 1.0 {
        return locale.less_than_minute().to_string();
    }

    locale.minutes(minutes.round() as u64)
}
