use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::SummarizationError;
use crate::domain::{SummarizationRequest, SummarizationResult, SummaryMethod, ValidationError};
use crate::infrastructure::observability::log_preview;
use crate::presentation::state::AppState;

use super::error::error_response;

/// Loosely typed on purpose: wrong-typed optional fields fall back to their
/// defaults instead of rejecting the request.
#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub length: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub word_count: usize,
    pub original_length: usize,
    pub compression_ratio: f64,
    pub method: SummaryMethod,
    pub url: String,
}

impl From<SummarizationResult> for SummarizeResponse {
    fn from(result: SummarizationResult) -> Self {
        Self {
            summary: result.summary,
            word_count: result.statistics.word_count,
            original_length: result.statistics.original_length,
            compression_ratio: result.statistics.compression_ratio,
            method: result.method,
            url: result.source_url,
        }
    }
}

impl SummarizeRequest {
    fn into_domain(self) -> Result<SummarizationRequest, ValidationError> {
        let text = self
            .text
            .as_ref()
            .and_then(Value::as_str)
            .ok_or(ValidationError::MissingText)?
            .trim()
            .to_string();

        Ok(SummarizationRequest::from_params(
            text,
            self.length.as_ref().and_then(Value::as_str),
            self.style.as_ref().and_then(Value::as_str),
            self.url.as_ref().and_then(Value::as_str).map(String::from),
        ))
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    body: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(body)) => body.into_domain(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable summarize body");
            Err(ValidationError::MissingText)
        }
    };

    let request = match request {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    tracing::debug!(text = %log_preview(&request.text), "Processing summarize request");

    match state.summarization_service.run(request).await {
        Ok(result) => (StatusCode::OK, Json(SummarizeResponse::from(result))).into_response(),
        Err(SummarizationError::Validation(e)) => {
            tracing::info!(error = %e, "Summarize request rejected");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Summarization error");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
