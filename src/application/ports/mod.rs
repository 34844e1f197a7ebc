mod generation_request;
mod generative_backend;
mod sentence_segmenter;
mod summarization_strategy;

pub use generation_request::{GenerationOptions, GenerationRequest};
pub use generative_backend::{GenerativeBackend, GenerativeBackendError};
pub use sentence_segmenter::SentenceSegmenter;
pub use summarization_strategy::SummarizationStrategy;
