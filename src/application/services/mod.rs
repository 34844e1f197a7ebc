mod availability_probe;
mod generative_summarizer;
mod heuristic_summarizer;
mod summarization_service;
mod text_normalizer;

pub use availability_probe::{AvailabilityHandle, AvailabilityProbe, model_names};
pub use generative_summarizer::{GenerativeSummarizer, build_prompt};
pub use heuristic_summarizer::HeuristicSummarizer;
pub use summarization_service::{SummarizationError, SummarizationService};
pub use text_normalizer::{TextNormalizer, truncate_chars};
