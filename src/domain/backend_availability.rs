use serde::Serialize;

/// Whether the generative backend is reachable and hosts the configured model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendAvailability {
    pub available: bool,
    pub model: String,
}

impl BackendAvailability {
    pub fn available(model: impl Into<String>) -> Self {
        Self {
            available: true,
            model: model.into(),
        }
    }

    pub fn unavailable(model: impl Into<String>) -> Self {
        Self {
            available: false,
            model: model.into(),
        }
    }
}
