//! Common `aprovider` imports for downstream crates.

pub use crate::{
    Candidate, Content, ModelProvider, ModelRequest, ModelRequestBuilder, ModelResponse, Part,
    ProviderError, ProviderErrorKind, ProviderFuture, ProviderId, Role, SecretString,
    SecureCredentialManager,
};
pub use acommon::{BoxFuture, GenerationOptions};
