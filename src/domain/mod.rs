mod backend_availability;
mod normalized_text;
mod summarization_request;
mod summarization_result;
mod summary_length;
mod summary_style;

pub use backend_availability::BackendAvailability;
pub use normalized_text::NormalizedText;
pub use summarization_request::{SummarizationRequest, ValidationError};
pub use summarization_result::{
    SummarizationResult, SummaryMethod, SummaryStatistics, compression_ratio, count_words,
};
pub use summary_length::SummaryLength;
pub use summary_style::SummaryStyle;
