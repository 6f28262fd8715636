//! Metrics-based session observer.
//!
//! ```rust
//! use achat::SessionObserver;
//! use aobserve::MetricsSessionObserver;
//!
//! fn accepts_observer(_observer: &dyn SessionObserver) {}
//!
//! accepts_observer(&MetricsSessionObserver);
//! ```

use std::time::Duration;

use achat::{ExchangeOutcome, Message, SessionObserver};
use acommon::SessionId;
use adocument::DocumentError;
use aprovider::ProviderError;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSessionObserver;

impl SessionObserver for MetricsSessionObserver {
    fn on_message_appended(&self, _session_id: &SessionId, message: &Message) {
        metrics::counter!(
            "arix_messages_total",
            "role" => message.role.as_str()
        )
        .increment(1);
    }

    fn on_pending_changed(&self, _session_id: &SessionId, pending: bool) {
        let gauge = metrics::gauge!("arix_pending");
        if pending {
            gauge.increment(1.0);
        } else {
            gauge.decrement(1.0);
        }
    }

    fn on_exchange_failed(&self, _session_id: &SessionId, error: &ProviderError) {
        metrics::counter!(
            "arix_exchange_failure_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_exchange_complete(
        &self,
        _session_id: &SessionId,
        outcome: &ExchangeOutcome,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "arix_exchange_total",
            "outcome" => outcome.label()
        )
        .increment(1);
        metrics::histogram!(
            "arix_exchange_latency_ms",
            "outcome" => outcome.label()
        )
        .record(elapsed.as_secs_f64() * 1000.0);
    }

    fn on_ingestion_success(&self, _session_id: &SessionId, page_count: usize, _text_len: usize) {
        metrics::counter!("arix_ingestion_total", "outcome" => "success").increment(1);
        metrics::histogram!("arix_ingestion_pages").record(page_count as f64);
    }

    fn on_ingestion_failure(&self, _session_id: &SessionId, error: &DocumentError) {
        metrics::counter!(
            "arix_ingestion_total",
            "outcome" => "failure",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}
