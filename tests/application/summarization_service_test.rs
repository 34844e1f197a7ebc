use std::sync::Arc;

use tldr_server::application::services::SummarizationError;
use tldr_server::domain::{
    SummarizationRequest, SummaryLength, SummaryMethod, SummaryStyle, ValidationError, count_words,
};
use tldr_server::infrastructure::llm::MockGenerativeBackend;

use crate::helpers::{
    TEST_MODEL, article_text, fragmented_text, refreshed_probe, summarization_service,
    text_of_length,
};

fn request(text: String, length: SummaryLength) -> SummarizationRequest {
    SummarizationRequest::new(
        text,
        length,
        SummaryStyle::Paragraph,
        "https://example.com/article".to_string(),
    )
}

#[tokio::test]
async fn given_short_text_when_running_then_rejects_before_any_summarizer() {
    let backend = Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]));
    let probe = refreshed_probe(backend.clone()).await;
    let service = summarization_service(backend.clone(), &probe);

    let result = service
        .run(request(text_of_length(99), SummaryLength::Medium))
        .await;

    assert!(matches!(
        result,
        Err(SummarizationError::Validation(ValidationError::TooShort { min: 100 }))
    ));
    assert_eq!(backend.generate_calls(), 0);
}

#[tokio::test]
async fn given_available_backend_when_running_then_uses_generative_summary() {
    let backend = Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]));
    let probe = refreshed_probe(backend.clone()).await;
    let service = summarization_service(backend.clone(), &probe);
    let text = article_text();

    let result = service
        .run(request(text.clone(), SummaryLength::Medium))
        .await
        .unwrap();

    assert_eq!(result.method, SummaryMethod::Generative);
    assert_eq!(result.summary, "Mock summary");
    assert_eq!(result.statistics.word_count, 2);
    assert_eq!(result.statistics.original_length, count_words(&text));
    assert_eq!(result.source_url, "https://example.com/article");
    assert_eq!(backend.generate_calls(), 1);
}

#[tokio::test]
async fn given_unavailable_backend_when_running_then_uses_heuristic_without_calling_backend() {
    let backend = Arc::new(MockGenerativeBackend::unreachable());
    let probe = refreshed_probe(backend.clone()).await;
    let service = summarization_service(backend.clone(), &probe);

    let result = service
        .run(request(fragmented_text(), SummaryLength::Short))
        .await
        .unwrap();

    assert_eq!(result.method, SummaryMethod::Heuristic);
    assert_eq!(
        result.summary,
        "Fragment 0 has some words. Fragment 1 has some words."
    );
    assert_eq!(backend.generate_calls(), 0);
}

#[tokio::test]
async fn given_empty_generative_reply_when_running_then_falls_back_to_heuristic() {
    let backend = Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]).replying(""));
    let probe = refreshed_probe(backend.clone()).await;
    let service = summarization_service(backend.clone(), &probe);

    let result = service
        .run(request(fragmented_text(), SummaryLength::Short))
        .await
        .unwrap();

    assert_eq!(result.method, SummaryMethod::Heuristic);
    assert_eq!(backend.generate_calls(), 1);
}

#[tokio::test]
async fn given_failing_generation_when_running_then_still_returns_summary() {
    let backend = Arc::new(MockGenerativeBackend::with_models(&[TEST_MODEL]).failing());
    let probe = refreshed_probe(backend.clone()).await;
    let service = summarization_service(backend.clone(), &probe);

    let result = service
        .run(request(article_text(), SummaryLength::Long))
        .await
        .unwrap();

    assert_eq!(result.method, SummaryMethod::Heuristic);
    assert!(!result.summary.is_empty());
}

#[tokio::test]
async fn given_filtered_short_sentences_when_running_then_original_length_counts_raw_text() {
    let backend = Arc::new(MockGenerativeBackend::unreachable());
    let probe = refreshed_probe(backend.clone()).await;
    let service = summarization_service(backend, &probe);
    let text = format!("Hi. Ok. Yes. {}", article_text());

    let result = service
        .run(request(text.clone(), SummaryLength::Long))
        .await
        .unwrap();

    assert_eq!(result.statistics.original_length, count_words(&text));
    assert!(!result.summary.starts_with("Hi."));
}

#[tokio::test]
async fn given_result_when_checking_ratio_then_matches_rounded_word_ratio() {
    let backend = Arc::new(MockGenerativeBackend::unreachable());
    let probe = refreshed_probe(backend.clone()).await;
    let service = summarization_service(backend, &probe);

    let result = service
        .run(request(fragmented_text(), SummaryLength::Medium))
        .await
        .unwrap();

    let stats = result.statistics;
    let expected =
        ((stats.word_count as f64 / stats.original_length as f64) * 100.0).round() / 100.0;
    assert_eq!(stats.compression_ratio, expected);
}
