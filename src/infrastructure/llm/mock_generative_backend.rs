use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::{Value, json};

use crate::application::ports::{GenerationRequest, GenerativeBackend, GenerativeBackendError};

/// Scripted backend that counts the calls it receives.
pub struct MockGenerativeBackend {
    models: Option<Vec<String>>,
    reply: Option<String>,
    listing_budget: Option<usize>,
    list_calls: AtomicUsize,
    generate_calls: AtomicUsize,
}

impl MockGenerativeBackend {
    /// A reachable backend hosting `models` that answers generations with "Mock summary".
    pub fn with_models(models: &[&str]) -> Self {
        Self {
            models: Some(models.iter().map(|m| m.to_string()).collect()),
            reply: Some("Mock summary".to_string()),
            listing_budget: None,
            list_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            models: None,
            reply: None,
            listing_budget: None,
            list_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(mut self, reply: &str) -> Self {
        self.reply = Some(reply.to_string());
        self
    }

    /// Generation requests fail with HTTP 500.
    pub fn failing(mut self) -> Self {
        self.reply = None;
        self
    }

    /// Model listings succeed for the first `calls` requests, then fail with HTTP 502.
    pub fn listing_fails_after(mut self, calls: usize) -> Self {
        self.listing_budget = Some(calls);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl GenerativeBackend for MockGenerativeBackend {
    async fn list_models(&self, _timeout: Duration) -> Result<Value, GenerativeBackendError> {
        let call = self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.listing_budget.is_some_and(|budget| call >= budget) {
            return Err(GenerativeBackendError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        match &self.models {
            Some(models) => Ok(json!({
                "models": models.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>()
            })),
            None => Err(GenerativeBackendError::Unreachable(
                "connection refused".to_string(),
            )),
        }
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerativeBackendError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        match (&self.models, &self.reply) {
            (None, _) => Err(GenerativeBackendError::Unreachable(
                "connection refused".to_string(),
            )),
            (Some(_), Some(reply)) => Ok(reply.clone()),
            (Some(_), None) => Err(GenerativeBackendError::Status {
                status: 500,
                body: "model crashed".to_string(),
            }),
        }
    }
}
