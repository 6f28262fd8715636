//! Gemini-specific credential helpers and auth resolution policy.

use crate::{ProviderError, ProviderId, SecureCredentialManager};

use super::types::GeminiAuth;

impl SecureCredentialManager {
    /// Stores a Gemini API key for `generateContent` requests.
    pub fn set_gemini_api_key(&self, api_key: impl Into<String>) -> Result<(), ProviderError> {
        self.set_api_key(ProviderId::Gemini, api_key)
    }
}

pub(crate) fn resolve_gemini_auth(
    credentials: &SecureCredentialManager,
) -> Result<GeminiAuth, ProviderError> {
    if let Some(api_key) = credentials.api_key(ProviderId::Gemini)? {
        return Ok(GeminiAuth::ApiKey(api_key));
    }

    Err(ProviderError::authentication("no Gemini API key configured"))
}
