use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::generation_request::GenerationRequest;

#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Raw model-listing payload, returned as the backend sent it.
    async fn list_models(&self, timeout: Duration) -> Result<Value, GenerativeBackendError>;

    /// Runs a single non-streaming generation and returns the response text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerativeBackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeBackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
