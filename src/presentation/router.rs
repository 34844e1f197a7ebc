use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{
    make_request_span, propagate_request_id_layer, set_request_id_layer,
};
use crate::presentation::handlers::{
    health_handler, models_handler, not_found_handler, refresh_backend_handler, summarize_handler,
};
use crate::presentation::state::AppState;

/// Builds the HTTP surface. Every route is served at the root and again under
/// `/api`, which is where the browser extension calls it.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(make_request_span)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .merge(routes())
        .nest("/api", routes())
        .fallback(not_found_handler)
        .layer(trace_layer)
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
        .layer(cors)
        .with_state(state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/summarize", post(summarize_handler))
        .route("/models", get(models_handler))
        .route("/backend/refresh", post(refresh_backend_handler))
}
