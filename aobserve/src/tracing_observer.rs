//! Tracing-based session observer.
//!
//! ```rust
//! use achat::SessionObserver;
//! use aobserve::TracingSessionObserver;
//!
//! fn accepts_observer(_observer: &dyn SessionObserver) {}
//!
//! accepts_observer(&TracingSessionObserver);
//! ```

use std::time::Duration;

use achat::{ExchangeOutcome, Message, SessionObserver};
use acommon::SessionId;
use adocument::DocumentError;
use aprovider::ProviderError;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSessionObserver;

impl SessionObserver for TracingSessionObserver {
    fn on_message_appended(&self, session_id: &SessionId, message: &Message) {
        tracing::debug!(
            phase = "session",
            event = "message_appended",
            session_id = %session_id,
            message_id = message.id.value(),
            role = %message.role,
            chars = message.content.chars().count()
        );
    }

    fn on_pending_changed(&self, session_id: &SessionId, pending: bool) {
        tracing::debug!(
            phase = "session",
            event = "pending_changed",
            session_id = %session_id,
            pending
        );
    }

    fn on_document_attached(&self, session_id: &SessionId, label: &str) {
        tracing::info!(
            phase = "ingestion",
            event = "document_attached",
            session_id = %session_id,
            label
        );
    }

    fn on_document_context_changed(&self, session_id: &SessionId, context: Option<&str>) {
        tracing::debug!(
            phase = "ingestion",
            event = "context_changed",
            session_id = %session_id,
            context_len = context.map(str::len).unwrap_or(0)
        );
    }

    fn on_exchange_failed(&self, session_id: &SessionId, error: &ProviderError) {
        tracing::warn!(
            phase = "exchange",
            event = "failure",
            session_id = %session_id,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }

    fn on_exchange_complete(
        &self,
        session_id: &SessionId,
        outcome: &ExchangeOutcome,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "exchange",
            event = "complete",
            session_id = %session_id,
            outcome = outcome.label(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_ingestion_success(&self, session_id: &SessionId, page_count: usize, text_len: usize) {
        tracing::info!(
            phase = "ingestion",
            event = "success",
            session_id = %session_id,
            page_count,
            text_len
        );
    }

    fn on_ingestion_failure(&self, session_id: &SessionId, error: &DocumentError) {
        tracing::error!(
            phase = "ingestion",
            event = "failure",
            session_id = %session_id,
            error_kind = ?error.kind,
            error = %error
        );
    }
}
