use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::presentation::state::AppState;

use super::error::error_response;

/// Proxies the backend's model list verbatim while the backend is marked available.
pub async fn models_handler(State(state): State<AppState>) -> Response {
    if !state.availability.is_available() {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Generative backend not available",
        );
    }

    match state.availability_probe.list_models(state.models_timeout).await {
        Ok(models) => (StatusCode::OK, Json(models)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch models from generative backend");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch models")
        }
    }
}
