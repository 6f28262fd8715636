//! Google Gemini `generateContent` adapter.

mod auth;
mod provider;
mod serde_api;
mod tests;
mod transport;
mod types;

pub use provider::{GEMINI_BASE_URL, GEMINI_DEFAULT_MODEL, GeminiProvider};
pub use transport::{GeminiHttpTransport, GeminiTransport};
pub use types::{
    GeminiAuth, GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiRequest,
    GeminiResponse, GeminiRole,
};
