//! Session observer hooks.
//!
//! Observers receive read-only views after a mutation has been committed and
//! the store lock released, so a callback can safely read the store again.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use achat::{NoopSessionObserver, ObserverSet, SessionObserver};
//!
//! let mut observers = ObserverSet::new();
//! observers.push(Arc::new(NoopSessionObserver));
//! assert_eq!(observers.len(), 1);
//!
//! fn accepts_observer(_observer: &dyn SessionObserver) {}
//! accepts_observer(&observers);
//! ```

use std::sync::Arc;
use std::time::Duration;

use acommon::SessionId;
use adocument::DocumentError;
use aprovider::ProviderError;

use crate::{ExchangeOutcome, Message};

pub trait SessionObserver: Send + Sync {
    fn on_message_appended(&self, _session_id: &SessionId, _message: &Message) {}

    fn on_pending_changed(&self, _session_id: &SessionId, _pending: bool) {}

    fn on_document_attached(&self, _session_id: &SessionId, _label: &str) {}

    fn on_document_context_changed(&self, _session_id: &SessionId, _context: Option<&str>) {}

    fn on_exchange_failed(&self, _session_id: &SessionId, _error: &ProviderError) {}

    fn on_exchange_complete(
        &self,
        _session_id: &SessionId,
        _outcome: &ExchangeOutcome,
        _elapsed: Duration,
    ) {
    }

    fn on_ingestion_success(&self, _session_id: &SessionId, _page_count: usize, _text_len: usize) {
    }

    fn on_ingestion_failure(&self, _session_id: &SessionId, _error: &DocumentError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionObserver;

impl SessionObserver for NoopSessionObserver {}

/// Fans every callback out to the registered observers in insertion order.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.observers.len())
            .finish()
    }
}

impl SessionObserver for ObserverSet {
    fn on_message_appended(&self, session_id: &SessionId, message: &Message) {
        for observer in &self.observers {
            observer.on_message_appended(session_id, message);
        }
    }

    fn on_pending_changed(&self, session_id: &SessionId, pending: bool) {
        for observer in &self.observers {
            observer.on_pending_changed(session_id, pending);
        }
    }

    fn on_document_attached(&self, session_id: &SessionId, label: &str) {
        for observer in &self.observers {
            observer.on_document_attached(session_id, label);
        }
    }

    fn on_document_context_changed(&self, session_id: &SessionId, context: Option<&str>) {
        for observer in &self.observers {
            observer.on_document_context_changed(session_id, context);
        }
    }

    fn on_exchange_failed(&self, session_id: &SessionId, error: &ProviderError) {
        for observer in &self.observers {
            observer.on_exchange_failed(session_id, error);
        }
    }

    fn on_exchange_complete(
        &self,
        session_id: &SessionId,
        outcome: &ExchangeOutcome,
        elapsed: Duration,
    ) {
        for observer in &self.observers {
            observer.on_exchange_complete(session_id, outcome, elapsed);
        }
    }

    fn on_ingestion_success(&self, session_id: &SessionId, page_count: usize, text_len: usize) {
        for observer in &self.observers {
            observer.on_ingestion_success(session_id, page_count, text_len);
        }
    }

    fn on_ingestion_failure(&self, session_id: &SessionId, error: &DocumentError) {
        for observer in &self.observers {
            observer.on_ingestion_failure(session_id, error);
        }
    }
}
