use axum::http::StatusCode;
use axum::response::Response;

use super::error::error_response;

pub async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}
