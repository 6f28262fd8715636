//! Runtime wiring helpers for chat sessions.

use std::sync::Arc;

use crate::{
    ArixConfig, ChatError, ChatSession, DocumentIngestor, ExchangeController, ModelProvider,
    SessionId, SessionObserver, SessionStore, build_provider_with_config,
};

/// Panic-isolated tracing and metrics observers.
pub fn default_observers() -> Vec<Arc<dyn SessionObserver>> {
    vec![
        Arc::new(aobserve::SafeSessionObserver::new(
            aobserve::TracingSessionObserver,
        )),
        Arc::new(aobserve::SafeSessionObserver::new(
            aobserve::MetricsSessionObserver,
        )),
    ]
}

/// PDF ingestor whose decoder is built on the first upload.
#[cfg(feature = "backend-lopdf")]
pub fn default_ingestor() -> Arc<DocumentIngestor> {
    Arc::new(DocumentIngestor::lazy(|| {
        Ok(Arc::new(adocument::pdf::LopdfBackend::new()) as Arc<dyn adocument::DocumentBackend>)
    }))
}

#[cfg(not(feature = "backend-lopdf"))]
pub fn default_ingestor() -> Arc<DocumentIngestor> {
    Arc::new(DocumentIngestor::lazy(|| {
        Err(adocument::DocumentError::backend_unavailable(
            "backend-lopdf feature is not enabled on arix",
        ))
    }))
}

/// Builds a Gemini-backed session with the default ingestor and observers.
pub fn build_session(config: &ArixConfig) -> Result<ChatSession, ChatError> {
    let provider = build_provider_with_config(config)?;
    Ok(build_session_with(
        config,
        provider,
        default_ingestor(),
        default_observers(),
    ))
}

pub fn build_session_with(
    config: &ArixConfig,
    provider: Arc<dyn ModelProvider>,
    ingestor: Arc<DocumentIngestor>,
    observers: Vec<Arc<dyn SessionObserver>>,
) -> ChatSession {
    let store = Arc::new(SessionStore::new(SessionId::generate()).with_observers(observers));
    let controller = ExchangeController::new(provider, store, config.model.clone())
        .with_context_label(config.context_label.clone());

    ChatSession::new(controller, ingestor)
}
