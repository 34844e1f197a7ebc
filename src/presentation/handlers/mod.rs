mod error;
mod health;
mod models;
mod not_found;
mod refresh;
mod summarize;

pub use error::{ErrorResponse, error_response};
pub use health::{HealthResponse, health_handler};
pub use models::models_handler;
pub use not_found::not_found_handler;
pub use refresh::refresh_backend_handler;
pub use summarize::{SummarizeRequest, SummarizeResponse, summarize_handler};
