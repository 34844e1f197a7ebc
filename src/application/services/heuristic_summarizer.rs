use async_trait::async_trait;

use crate::application::ports::SummarizationStrategy;
use crate::domain::{NormalizedText, SummaryLength, SummaryMethod, SummaryStyle};

const FRAGMENT_SEPARATOR: &str = ". ";

/// Keeps the leading sentence-like fragments of the text. Splits only on
/// `". "`, so abbreviations and other terminators are not recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSummarizer;

impl HeuristicSummarizer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, text: &str, length: SummaryLength) -> String {
        let budget = length.fragment_budget();
        let fragments: Vec<&str> = text.split(FRAGMENT_SEPARATOR).collect();

        if fragments.len() <= budget {
            return text.to_string();
        }

        let mut summary = fragments[..budget].join(FRAGMENT_SEPARATOR);
        if !summary.ends_with('.') {
            summary.push('.');
        }
        summary
    }
}

#[async_trait]
impl SummarizationStrategy for HeuristicSummarizer {
    fn method(&self) -> SummaryMethod {
        SummaryMethod::Heuristic
    }

    async fn attempt(
        &self,
        text: &NormalizedText,
        length: SummaryLength,
        _style: SummaryStyle,
    ) -> Option<String> {
        Some(self.summarize(text.as_str(), length))
    }
}
