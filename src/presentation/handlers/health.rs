use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub segmentation_available: bool,
    pub generative_available: bool,
    pub model: String,
    pub timestamp: f64,
}

/// Reports the cached backend fact; never probes.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let availability = state.availability.current();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            segmentation_available: state
                .summarization_service
                .normalizer()
                .segmentation_available(),
            generative_available: availability.available,
            model: availability.model,
            timestamp: chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
        }),
    )
}
