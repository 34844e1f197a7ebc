use std::sync::Arc;

use tldr_server::application::services::{AvailabilityHandle, GenerativeSummarizer, build_prompt};
use tldr_server::domain::{BackendAvailability, NormalizedText, SummaryLength, SummaryStyle};
use tldr_server::infrastructure::llm::MockGenerativeBackend;

use crate::helpers::TEST_MODEL;

fn summarizer_over(
    backend: &Arc<MockGenerativeBackend>,
    availability: BackendAvailability,
) -> GenerativeSummarizer {
    GenerativeSummarizer::new(
        backend.clone(),
        AvailabilityHandle::fixed(availability),
        TEST_MODEL.to_string(),
    )
}

#[test]
fn given_length_and_style_when_building_prompt_then_embeds_instructions_and_text() {
    let prompt = build_prompt(
        "The full article body.",
        SummaryLength::Short,
        SummaryStyle::Bullet,
    );

    assert!(prompt.contains("in 1-2 sentences as bullet points"));
    assert!(prompt.contains("The full article body."));
    assert!(prompt.contains("concise"));
    assert!(prompt.trim_end().ends_with("Summary:"));
}

#[test]
fn given_key_points_long_when_building_prompt_then_uses_matching_fragments() {
    let prompt = build_prompt("Body", SummaryLength::Long, SummaryStyle::KeyPoints);

    assert!(prompt.contains("in 6-10 sentences as key points with brief explanations"));
}

#[tokio::test]
async fn given_unavailable_backend_when_summarizing_then_returns_none_without_calling() {
    let backend = Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]));
    let summarizer = summarizer_over(&backend, BackendAvailability::unavailable(TEST_MODEL));

    let summary = summarizer
        .summarize(
            &NormalizedText::new("Some text to summarize."),
            SummaryLength::Medium,
            SummaryStyle::Paragraph,
        )
        .await;

    assert!(summary.is_none());
    assert_eq!(backend.generate_calls(), 0);
}

#[tokio::test]
async fn given_padded_reply_when_summarizing_then_returns_trimmed_summary() {
    let backend =
        Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]).replying("  A tidy summary.\n"));
    let summarizer = summarizer_over(&backend, BackendAvailability::available(TEST_MODEL));

    let summary = summarizer
        .summarize(
            &NormalizedText::new("Some text to summarize."),
            SummaryLength::Medium,
            SummaryStyle::Paragraph,
        )
        .await;

    assert_eq!(summary.as_deref(), Some("A tidy summary."));
    assert_eq!(backend.generate_calls(), 1);
}

#[tokio::test]
async fn given_blank_reply_when_summarizing_then_returns_none() {
    let backend = Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]).replying("   \n"));
    let summarizer = summarizer_over(&backend, BackendAvailability::available(TEST_MODEL));

    let summary = summarizer
        .summarize(
            &NormalizedText::new("Some text to summarize."),
            SummaryLength::Short,
            SummaryStyle::Bullet,
        )
        .await;

    assert!(summary.is_none());
}

#[tokio::test]
async fn given_backend_error_when_summarizing_then_returns_none() {
    let backend = Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]).failing());
    let summarizer = summarizer_over(&backend, BackendAvailability::available(TEST_MODEL));

    let summary = summarizer
        .summarize(
            &NormalizedText::new("Some text to summarize."),
            SummaryLength::Long,
            SummaryStyle::KeyPoints,
        )
        .await;

    assert!(summary.is_none());
    assert_eq!(backend.generate_calls(), 1);
}
