use async_trait::async_trait;

use crate::domain::{NormalizedText, SummaryLength, SummaryMethod, SummaryStyle};

/// One way of producing a summary. `attempt` returns `None` when the strategy
/// cannot produce a usable summary, letting the caller move on to the next one.
#[async_trait]
pub trait SummarizationStrategy: Send + Sync {
    fn method(&self) -> SummaryMethod;

    async fn attempt(
        &self,
        text: &NormalizedText,
        length: SummaryLength,
        style: SummaryStyle,
    ) -> Option<String>;
}
