use super::summary_length::SummaryLength;
use super::summary_style::SummaryStyle;

/// A single summarization call, with parameters already coerced to their enums.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizationRequest {
    pub text: String,
    pub length: SummaryLength,
    pub style: SummaryStyle,
    pub source_url: String,
}

impl SummarizationRequest {
    pub fn new(text: String, length: SummaryLength, style: SummaryStyle, source_url: String) -> Self {
        Self {
            text,
            length,
            style,
            source_url,
        }
    }

    /// Builds a request from loosely-typed client fields. Unknown `length` and
    /// `style` values fall back to their defaults instead of failing.
    pub fn from_params(
        text: String,
        length: Option<&str>,
        style: Option<&str>,
        source_url: Option<String>,
    ) -> Self {
        Self::new(
            text,
            SummaryLength::coerce(length),
            SummaryStyle::coerce(style),
            source_url.unwrap_or_default(),
        )
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn validate(&self, min_length: usize) -> Result<(), ValidationError> {
        if self.char_count() < min_length {
            return Err(ValidationError::TooShort { min: min_length });
        }
        Ok(())
    }
}

/// Client input that cannot enter the pipeline. `Display` is the message sent
/// back to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No text provided")]
    MissingText,
    #[error("Text too short (minimum {min} characters)")]
    TooShort { min: usize },
}
