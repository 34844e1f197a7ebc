use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::presentation::state::AppState;

/// Re-probes the backend and publishes the result to the summarization path.
pub async fn refresh_backend_handler(State(state): State<AppState>) -> impl IntoResponse {
    let availability = state.availability_probe.refresh().await;
    (StatusCode::OK, Json(availability))
}
