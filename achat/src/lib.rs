//! Chat session core: transcript store, exchange orchestration, and the
//! presentation-facing session.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use achat::{ExchangeController, SessionId, SessionStore};
//! use aprovider::{ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture, ProviderId, Candidate};
//!
//! struct Echo;
//!
//! impl ModelProvider for Echo {
//!     fn id(&self) -> ProviderId {
//!         ProviderId::Gemini
//!     }
//!
//!     fn complete<'a>(
//!         &'a self,
//!         request: ModelRequest,
//!     ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
//!         Box::pin(async move {
//!             let last = request.contents.last().map(|c| c.text.clone()).unwrap_or_default();
//!             Ok(ModelResponse::new(ProviderId::Gemini, request.model, vec![Candidate::from_text(last)]))
//!         })
//!     }
//! }
//!
//! let store = Arc::new(SessionStore::new(SessionId::generate()));
//! let controller = ExchangeController::new(Arc::new(Echo), store.clone(), "gemini-2.5-pro");
//! let _exchange = controller.submit("Hi");
//! ```

mod controller;
mod error;
mod hooks;
mod payload;
mod session;
mod store;
mod types;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, ChatSession, DocumentOutcome, ExchangeController,
        ExchangeOutcome, Message, MessageId, NoopSessionObserver, ObserverSet, PendingExchange,
        SessionObserver, SessionSnapshot, SessionStore, UploadTicket,
    };
    pub use acommon::SessionId;
}

pub use acommon::SessionId;
pub use controller::{ExchangeController, PendingExchange};
pub use error::{ChatError, ChatErrorKind};
pub use hooks::{NoopSessionObserver, ObserverSet, SessionObserver};
pub use payload::build_contents;
pub use session::ChatSession;
pub use store::SessionStore;
pub use types::{
    DEFAULT_CONTEXT_LABEL, DocumentOutcome, ExchangeOutcome, FETCH_FAILED_PLACEHOLDER, Message,
    MessageId, SessionSnapshot, UNAVAILABLE_PLACEHOLDER, UploadTicket,
};
