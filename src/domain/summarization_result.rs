use std::fmt;

use serde::Serialize;

/// Which path produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    Generative,
    Heuristic,
}

impl SummaryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generative => "generative",
            Self::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub word_count: usize,
    pub original_length: usize,
    pub compression_ratio: f64,
}

impl SummaryStatistics {
    /// Word counts are whitespace-delimited. `original` is the client's text,
    /// not the normalized text the summarizers saw.
    pub fn compute(summary: &str, original: &str) -> Self {
        let word_count = count_words(summary);
        let original_length = count_words(original);

        Self {
            word_count,
            original_length,
            compression_ratio: compression_ratio(word_count, original_length),
        }
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `word_count / original_length` rounded to two decimals with ties to even,
/// or `0.0` for an empty original.
pub fn compression_ratio(word_count: usize, original_length: usize) -> f64 {
    if original_length == 0 {
        return 0.0;
    }
    let ratio = word_count as f64 / original_length as f64;
    (ratio * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarizationResult {
    pub summary: String,
    pub method: SummaryMethod,
    pub statistics: SummaryStatistics,
    pub source_url: String,
}
