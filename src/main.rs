use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use tldr_server::application::ports::{GenerativeBackend, SentenceSegmenter};
use tldr_server::application::services::{
    AvailabilityProbe, GenerativeSummarizer, SummarizationService, TextNormalizer,
};
use tldr_server::infrastructure::llm::OllamaClient;
use tldr_server::infrastructure::observability::{TracingConfig, init_tracing};
use tldr_server::infrastructure::text_processing::UnicodeSentenceSegmenter;
use tldr_server::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        settings.environment.as_str(),
        settings.logging.json,
        settings.server.debug,
    ));

    tracing::info!("Starting TLDR backend server");

    let backend: Arc<dyn GenerativeBackend> = Arc::new(OllamaClient::new(
        &settings.backend.base_url,
        settings.backend.generation_timeout(),
    ));

    let availability_probe = Arc::new(AvailabilityProbe::new(
        Arc::clone(&backend),
        settings.backend.model.clone(),
        settings.backend.probe_timeout(),
    ));

    if !availability_probe.refresh().await.available {
        tracing::warn!("Generative backend not available, will use heuristic summarization");
    }

    if let Some(interval) = settings.backend.refresh_interval() {
        tracing::info!(interval_secs = interval.as_secs(), "Periodic backend re-probe enabled");
        Arc::clone(&availability_probe).spawn_periodic_refresh(interval);
    }

    let segmenter: Option<Arc<dyn SentenceSegmenter>> = if settings.text.segmentation {
        Some(Arc::new(UnicodeSentenceSegmenter))
    } else {
        tracing::warn!("Sentence segmentation disabled, text preprocessing will be limited");
        None
    };
    let normalizer = Arc::new(TextNormalizer::new(segmenter, settings.text.max_length));

    let generative_summarizer = Arc::new(GenerativeSummarizer::new(
        backend,
        availability_probe.handle(),
        settings.backend.model.clone(),
    ));

    let summarization_service = Arc::new(
        SummarizationService::new(normalizer, settings.text.min_length)
            .with_strategy(generative_summarizer),
    );

    let state = AppState::new(
        summarization_service,
        Arc::clone(&availability_probe),
        settings.backend.models_timeout(),
    );

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let availability = availability_probe.current();
    tracing::info!(
        %addr,
        segmentation_available = settings.text.segmentation,
        generative_available = availability.available,
        model = %availability.model,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
