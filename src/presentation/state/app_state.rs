use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{AvailabilityHandle, AvailabilityProbe, SummarizationService};

#[derive(Clone)]
pub struct AppState {
    pub summarization_service: Arc<SummarizationService>,
    pub availability_probe: Arc<AvailabilityProbe>,
    pub availability: AvailabilityHandle,
    pub models_timeout: Duration,
}

impl AppState {
    pub fn new(
        summarization_service: Arc<SummarizationService>,
        availability_probe: Arc<AvailabilityProbe>,
        models_timeout: Duration,
    ) -> Self {
        let availability = availability_probe.handle();
        Self {
            summarization_service,
            availability_probe,
            availability,
            models_timeout,
        }
    }
}
