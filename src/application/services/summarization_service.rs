use std::sync::Arc;

use crate::application::ports::SummarizationStrategy;
use crate::domain::{
    NormalizedText, SummarizationRequest, SummarizationResult, SummaryLength, SummaryMethod,
    SummaryStatistics, SummaryStyle, ValidationError,
};

use super::heuristic_summarizer::HeuristicSummarizer;
use super::text_normalizer::TextNormalizer;

/// Validates, normalizes, and summarizes a request. Strategies are tried in
/// registration order; the heuristic summarizer always runs last and always
/// produces a summary.
pub struct SummarizationService {
    normalizer: Arc<TextNormalizer>,
    strategies: Vec<Arc<dyn SummarizationStrategy>>,
    fallback: HeuristicSummarizer,
    min_length: usize,
}

impl SummarizationService {
    pub fn new(normalizer: Arc<TextNormalizer>, min_length: usize) -> Self {
        Self {
            normalizer,
            strategies: Vec::new(),
            fallback: HeuristicSummarizer::new(),
            min_length,
        }
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn SummarizationStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub async fn run(
        &self,
        request: SummarizationRequest,
    ) -> Result<SummarizationResult, SummarizationError> {
        request.validate(self.min_length)?;

        tracing::info!(
            length = %request.length,
            style = %request.style,
            text_length = request.char_count(),
            "Summarization request"
        );

        let SummarizationRequest {
            text,
            length,
            style,
            source_url,
        } = request;

        // Segmentation over up to max_length characters is CPU-bound.
        let normalizer = Arc::clone(&self.normalizer);
        let (text, normalized) = tokio::task::spawn_blocking(move || {
            let normalized = normalizer.normalize(&text);
            (text, normalized)
        })
        .await
        .map_err(|e| SummarizationError::Internal(format!("normalization task failed: {}", e)))?;

        let (summary, method) = self.summarize(&normalized, length, style).await;
        let statistics = SummaryStatistics::compute(&summary, &text);

        tracing::info!(
            %method,
            word_count = statistics.word_count,
            original_length = statistics.original_length,
            compression_ratio = statistics.compression_ratio,
            "Summarization complete"
        );

        Ok(SummarizationResult {
            summary,
            method,
            statistics,
            source_url,
        })
    }

    async fn summarize(
        &self,
        text: &NormalizedText,
        length: SummaryLength,
        style: SummaryStyle,
    ) -> (String, SummaryMethod) {
        for strategy in &self.strategies {
            match strategy.attempt(text, length, style).await {
                Some(summary) if !summary.trim().is_empty() => return (summary, strategy.method()),
                _ => tracing::debug!(method = %strategy.method(), "Strategy produced no summary"),
            }
        }

        tracing::info!("Using heuristic summarization");
        (
            self.fallback.summarize(text.as_str(), length),
            SummaryMethod::Heuristic,
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("internal: {0}")]
    Internal(String),
}
