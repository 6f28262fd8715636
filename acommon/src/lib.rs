//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use acommon::{GenerationOptions, SessionId};
//!
//! let session = SessionId::from("session-1");
//! let options = GenerationOptions::plain_text().with_temperature(0.3);
//!
//! assert_eq!(session.as_str(), "session-1");
//! assert_eq!(options.response_mime_type.as_deref(), Some("text/plain"));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use acommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Session identifier newtype.
    //!
    //! ```rust
    //! use acommon::SessionId;
    //!
    //! let named = SessionId::new("session-42");
    //! let generated = SessionId::generate();
    //!
    //! assert_eq!(named.to_string(), "session-42");
    //! assert_ne!(generated, SessionId::generate());
    //! ```

    use std::fmt::{Display, Formatter};
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SessionId(String);

    impl SessionId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        /// Returns a process-unique id of the form `session-<n>`.
        pub fn generate() -> Self {
            let next = NEXT_SESSION.fetch_add(1, Ordering::Relaxed);
            Self(format!("session-{next}"))
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for SessionId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for SessionId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for SessionId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod model {
    //! Shared generation settings used by request types.
    //!
    //! ```rust
    //! use acommon::GenerationOptions;
    //!
    //! let options = GenerationOptions::default()
    //!     .with_response_mime_type("text/plain")
    //!     .with_max_output_tokens(128);
    //!
    //! assert_eq!(options.response_mime_type.as_deref(), Some("text/plain"));
    //! assert_eq!(options.max_output_tokens, Some(128));
    //! ```

    pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct GenerationOptions {
        pub response_mime_type: Option<String>,
        pub temperature: Option<f32>,
        pub max_output_tokens: Option<u32>,
    }

    impl GenerationOptions {
        /// Options requesting unstructured text output and nothing else.
        pub fn plain_text() -> Self {
            Self::default().with_response_mime_type(PLAIN_TEXT_MIME_TYPE)
        }

        pub fn with_response_mime_type(mut self, mime_type: impl Into<String>) -> Self {
            self.response_mime_type = Some(mime_type.into());
            self
        }

        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
            self.max_output_tokens = Some(max_output_tokens);
            self
        }
    }
}

pub use context::SessionId;
pub use future::BoxFuture;
pub use model::{GenerationOptions, PLAIN_TEXT_MIME_TYPE};
