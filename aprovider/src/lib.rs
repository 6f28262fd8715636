//! Provider-agnostic completion contracts and concrete provider adapters.
//!
//! ```rust
//! use aprovider::{Content, ModelRequest, Role};
//!
//! let request = ModelRequest::builder("gemini-2.5-pro")
//!     .content(Content::new(Role::User, "Hi"))
//!     .build()
//!     .expect("request should validate");
//!
//! assert_eq!(request.contents.len(), 1);
//! assert_eq!(request.options.response_mime_type.as_deref(), Some("text/plain"));
//! ```

mod credentials;
mod error;
mod model;
mod provider;

pub mod adapters;
pub mod prelude;

pub use credentials::{SecretString, SecureCredentialManager};
pub use error::{ProviderError, ProviderErrorKind};
pub use model::{
    Candidate, Content, ModelRequest, ModelRequestBuilder, ModelResponse, Part, ProviderId, Role,
};
pub use provider::{ModelProvider, ProviderFuture};
