use std::sync::Arc;
use std::time::Duration;

use tldr_server::application::services::{
    AvailabilityProbe, GenerativeSummarizer, SummarizationService, TextNormalizer,
};
use tldr_server::infrastructure::llm::MockGenerativeBackend;
use tldr_server::infrastructure::text_processing::UnicodeSentenceSegmenter;

pub const TEST_MODEL: &str = "llama3.1:8b";
pub const TEST_MAX_LENGTH: usize = 50_000;
pub const TEST_MIN_LENGTH: usize = 100;

const SAMPLE_SENTENCE: &str = "Rust services are assembled from small, well-tested pieces. ";

/// Probe over `backend`, already refreshed once as at startup.
pub async fn refreshed_probe(backend: Arc<MockGenerativeBackend>) -> Arc<AvailabilityProbe> {
    let probe = Arc::new(AvailabilityProbe::new(
        backend,
        TEST_MODEL.to_string(),
        Duration::from_secs(5),
    ));
    probe.refresh().await;
    probe
}

pub fn summarization_service(
    backend: Arc<MockGenerativeBackend>,
    probe: &AvailabilityProbe,
) -> SummarizationService {
    let normalizer = Arc::new(TextNormalizer::new(
        Some(Arc::new(UnicodeSentenceSegmenter)),
        TEST_MAX_LENGTH,
    ));
    let generative = Arc::new(GenerativeSummarizer::new(
        backend,
        probe.handle(),
        TEST_MODEL.to_string(),
    ));
    SummarizationService::new(normalizer, TEST_MIN_LENGTH).with_strategy(generative)
}

/// Text of exactly `chars` characters with no surrounding whitespace.
pub fn text_of_length(chars: usize) -> String {
    let mut text: String = SAMPLE_SENTENCE
        .repeat(chars / SAMPLE_SENTENCE.len() + 1)
        .chars()
        .take(chars - 1)
        .collect();
    text.push('.');
    text
}

pub fn article_text() -> String {
    SAMPLE_SENTENCE.repeat(10).trim().to_string()
}

/// Fifty period-space separated fragments, each longer than ten characters.
pub fn fragmented_text() -> String {
    let fragments: Vec<String> = (0..50)
        .map(|i| format!("Fragment {} has some words", i))
        .collect();
    format!("{}.", fragments.join(". "))
}
