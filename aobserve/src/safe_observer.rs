use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use achat::{ExchangeOutcome, Message, SessionObserver};
use acommon::SessionId;
use adocument::DocumentError;
use aprovider::ProviderError;

/// Runs the wrapped observer and discards any panic it raises.
pub struct SafeSessionObserver<H> {
    inner: H,
}

impl<H> SafeSessionObserver<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H> SessionObserver for SafeSessionObserver<H>
where
    H: SessionObserver,
{
    fn on_message_appended(&self, session_id: &SessionId, message: &Message) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_message_appended(session_id, message)
        }));
    }

    fn on_pending_changed(&self, session_id: &SessionId, pending: bool) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_pending_changed(session_id, pending)
        }));
    }

    fn on_document_attached(&self, session_id: &SessionId, label: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_document_attached(session_id, label)
        }));
    }

    fn on_document_context_changed(&self, session_id: &SessionId, context: Option<&str>) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_document_context_changed(session_id, context)
        }));
    }

    fn on_exchange_failed(&self, session_id: &SessionId, error: &ProviderError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_exchange_failed(session_id, error)
        }));
    }

    fn on_exchange_complete(
        &self,
        session_id: &SessionId,
        outcome: &ExchangeOutcome,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_exchange_complete(session_id, outcome, elapsed)
        }));
    }

    fn on_ingestion_success(&self, session_id: &SessionId, page_count: usize, text_len: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_ingestion_success(session_id, page_count, text_len)
        }));
    }

    fn on_ingestion_failure(&self, session_id: &SessionId, error: &DocumentError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_ingestion_failure(session_id, error)
        }));
    }
}
