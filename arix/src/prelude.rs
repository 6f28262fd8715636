//! Common imports for most arix applications.

pub use crate::{
    ArixConfig, ChatError, ChatErrorKind, ChatSession, ConfigError, ConfigErrorKind, Content,
    DocumentError, DocumentIngestor, DocumentOutcome, ExchangeController, ExchangeOutcome, Message,
    ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderErrorKind, ProviderId,
    Role, SessionId, SessionObserver, SessionStore,
};
pub use crate::{arix_content, arix_contents};
pub use crate::{
    build_provider_from_api_key, build_provider_with_config, build_session, build_session_with,
    default_ingestor, default_observers, model_content, parse_role, user_content,
};
