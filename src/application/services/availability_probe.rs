use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::application::ports::{GenerativeBackend, GenerativeBackendError};
use crate::domain::BackendAvailability;

/// Owns the process-wide availability fact for the generative backend.
///
/// The fact only changes when [`AvailabilityProbe::refresh`] is called; request
/// handling reads it through an [`AvailabilityHandle`] and never probes.
pub struct AvailabilityProbe {
    backend: Arc<dyn GenerativeBackend>,
    model: String,
    timeout: Duration,
    state: watch::Sender<BackendAvailability>,
}

impl AvailabilityProbe {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(backend: Arc<dyn GenerativeBackend>, model: String, timeout: Duration) -> Self {
        let (state, _) = watch::channel(BackendAvailability::unavailable(model.clone()));
        Self {
            backend,
            model,
            timeout,
            state,
        }
    }

    pub fn handle(&self) -> AvailabilityHandle {
        AvailabilityHandle(self.state.subscribe())
    }

    pub fn current(&self) -> BackendAvailability {
        self.state.borrow().clone()
    }

    /// Checks the backend without touching the cached fact. Never fails:
    /// every backend problem reads as unavailable.
    pub async fn probe(&self) -> BackendAvailability {
        let payload = match self.backend.list_models(self.timeout).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, model = %self.model, "Generative backend not available");
                return BackendAvailability::unavailable(&self.model);
            }
        };

        let Some(names) = model_names(&payload) else {
            tracing::warn!(model = %self.model, "Generative backend returned a malformed model list");
            return BackendAvailability::unavailable(&self.model);
        };

        if names.iter().any(|name| name == &self.model) {
            tracing::info!(model = %self.model, "Generative backend available");
            BackendAvailability::available(&self.model)
        } else {
            tracing::warn!(
                model = %self.model,
                available_models = ?names,
                "Configured model not found on generative backend"
            );
            BackendAvailability::unavailable(&self.model)
        }
    }

    /// Probes the backend and publishes the result to every handle.
    pub async fn refresh(&self) -> BackendAvailability {
        let availability = self.probe().await;
        let previous = self.state.send_replace(availability.clone());
        if previous.available != availability.available {
            tracing::info!(
                available = availability.available,
                model = %availability.model,
                "Generative backend availability changed"
            );
        }
        availability
    }

    /// Re-probes on a fixed interval until the task is aborted. The first
    /// probe happens one `interval` after the call.
    pub fn spawn_periodic_refresh(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.refresh().await;
            }
        })
    }

    /// Direct model-listing query for inspection endpoints.
    pub async fn list_models(&self, timeout: Duration) -> Result<Value, GenerativeBackendError> {
        self.backend.list_models(timeout).await
    }
}

/// Read side of the availability fact. Cloning is cheap.
#[derive(Clone)]
pub struct AvailabilityHandle(watch::Receiver<BackendAvailability>);

impl AvailabilityHandle {
    /// A handle pinned to a fixed value, for wiring without a probe.
    pub fn fixed(availability: BackendAvailability) -> Self {
        let (_, receiver) = watch::channel(availability);
        Self(receiver)
    }

    pub fn current(&self) -> BackendAvailability {
        self.0.borrow().clone()
    }

    pub fn is_available(&self) -> bool {
        self.0.borrow().available
    }
}

/// Extracts `models[].name` from a listing payload. Any deviation from that
/// shape yields `None`.
pub fn model_names(payload: &Value) -> Option<Vec<String>> {
    payload
        .get("models")?
        .as_array()?
        .iter()
        .map(|model| model.get("name")?.as_str().map(String::from))
        .collect()
}
