use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{
    GenerationOptions, GenerationRequest, GenerativeBackend, GenerativeBackendError,
};

/// HTTP client for an Ollama server.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    generation_timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequestBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerationOptions,
}

#[derive(Deserialize)]
struct GenerateResponseBody {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(base_url: &str, generation_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            generation_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerativeBackendError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(GenerativeBackendError::Status { status, body })
    }
}

fn map_transport_error(e: reqwest::Error) -> GenerativeBackendError {
    if e.is_decode() {
        GenerativeBackendError::InvalidResponse(e.to_string())
    } else {
        GenerativeBackendError::Unreachable(e.to_string())
    }
}

#[async_trait]
impl GenerativeBackend for OllamaClient {
    async fn list_models(&self, timeout: Duration) -> Result<Value, GenerativeBackendError> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::ensure_success(response)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| GenerativeBackendError::InvalidResponse(e.to_string()))
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerativeBackendError> {
        let body = GenerateRequestBody {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
            options: request.options,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.generation_timeout)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = Self::ensure_success(response).await?;

        let parsed: GenerateResponseBody = response
            .json()
            .await
            .map_err(|e| GenerativeBackendError::InvalidResponse(e.to_string()))?;

        Ok(parsed.response)
    }
}
