//! Unified facade over the arix workspace crates.
//!
//! This crate is the single dependency most applications need. It re-exports
//! the chat, provider, document, and observability crates and wires them into
//! a ready-to-use [`ChatSession`].
//!
//! ```rust,no_run
//! use arix::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ArixConfig::from_env()?;
//! let session = build_session(&config)?;
//!
//! session.attach_document(&std::fs::read("report.pdf")?, "report.pdf").await?;
//! if let Some(outcome) = session.submit("Summarize the report").await? {
//!     println!("{outcome:?}");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod macros;
mod providers;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use achat;
pub use acommon;
pub use adocument;
pub use aobserve;
pub use aprovider;

pub use achat::{
    ChatError, ChatErrorKind, ChatSession, DEFAULT_CONTEXT_LABEL, DocumentOutcome,
    ExchangeController, ExchangeOutcome, FETCH_FAILED_PLACEHOLDER, Message, MessageId,
    NoopSessionObserver, PendingExchange, SessionObserver, SessionSnapshot, SessionStore,
    UNAVAILABLE_PLACEHOLDER, UploadTicket,
};
pub use acommon::{BoxFuture, GenerationOptions, SessionId};
pub use adocument::{
    DocumentBackend, DocumentError, DocumentErrorKind, DocumentIngestor, IngestedDocument,
    ParsedDocument, StaticDocumentBackend,
};
pub use aobserve::{MetricsSessionObserver, SafeSessionObserver, TracingSessionObserver};
pub use aprovider::{
    Candidate, Content, ModelProvider, ModelRequest, ModelResponse, Part, ProviderError,
    ProviderErrorKind, ProviderFuture, ProviderId, Role, SecretString, SecureCredentialManager,
};

pub use config::{
    ArixConfig, ConfigError, ConfigErrorKind, DEFAULT_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL,
    ENV_TIMEOUT_SECS,
};
pub use providers::{build_provider_from_api_key, build_provider_with_config};
pub use runtime::{build_session, build_session_with, default_ingestor, default_observers};
pub use util::{model_content, parse_role, user_content};
