use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    GenerationOptions, GenerationRequest, GenerativeBackend, SummarizationStrategy,
};
use crate::domain::{NormalizedText, SummaryLength, SummaryMethod, SummaryStyle};
use crate::infrastructure::observability::log_preview;

use super::availability_probe::AvailabilityHandle;

pub struct GenerativeSummarizer {
    backend: Arc<dyn GenerativeBackend>,
    availability: AvailabilityHandle,
    model: String,
    options: GenerationOptions,
}

impl GenerativeSummarizer {
    pub fn new(
        backend: Arc<dyn GenerativeBackend>,
        availability: AvailabilityHandle,
        model: String,
    ) -> Self {
        Self {
            backend,
            availability,
            model,
            options: GenerationOptions::default(),
        }
    }

    /// Returns `None` without calling the backend when it is marked
    /// unavailable, and `None` on any backend failure or blank response.
    pub async fn summarize(
        &self,
        text: &NormalizedText,
        length: SummaryLength,
        style: SummaryStyle,
    ) -> Option<String> {
        if !self.availability.is_available() {
            return None;
        }

        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: build_prompt(text.as_str(), length, style),
            options: self.options,
        };

        tracing::debug!(
            model = %self.model,
            %length,
            %style,
            text = %log_preview(text.as_str()),
            "Requesting generative summary"
        );

        match self.backend.generate(&request).await {
            Ok(response) => {
                let summary = response.trim();
                if summary.is_empty() {
                    tracing::warn!(model = %self.model, "Generative backend returned an empty summary");
                    None
                } else {
                    Some(summary.to_string())
                }
            }
            Err(e) => {
                tracing::error!(error = %e, model = %self.model, "Generative summarization failed");
                None
            }
        }
    }
}

#[async_trait]
impl SummarizationStrategy for GenerativeSummarizer {
    fn method(&self) -> SummaryMethod {
        SummaryMethod::Generative
    }

    async fn attempt(
        &self,
        text: &NormalizedText,
        length: SummaryLength,
        style: SummaryStyle,
    ) -> Option<String> {
        self.summarize(text, length, style).await
    }
}

pub fn build_prompt(text: &str, length: SummaryLength, style: SummaryStyle) -> String {
    format!(
        "Please summarize the following text {} {}.\n\
         Focus on the main ideas and key information. Be concise and clear.\n\
         \n\
         Text to summarize:\n\
         {}\n\
         \n\
         Summary:",
        length.prompt_instruction(),
        style.prompt_instruction(),
        text
    )
}
