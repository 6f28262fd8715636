//! Stable provider construction surface for facade consumers.

use std::sync::Arc;

use reqwest::Client;

use crate::{ArixConfig, ModelProvider, ProviderError, SecureCredentialManager};

pub fn build_provider_from_api_key(
    api_key: impl Into<String>,
) -> Result<Arc<dyn ModelProvider>, ProviderError> {
    build_provider_with_config(&ArixConfig::new(api_key))
}

pub fn build_provider_with_config(
    config: &ArixConfig,
) -> Result<Arc<dyn ModelProvider>, ProviderError> {
    let api_key = config.api_key.expose().trim();
    if api_key.is_empty() {
        return Err(ProviderError::authentication(
            "provider API key must not be empty",
        ));
    }

    let credentials = Arc::new(SecureCredentialManager::new());
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))?;

    build_gemini_provider(credentials, api_key, http, config)
}

#[cfg(feature = "provider-gemini")]
fn build_gemini_provider(
    credentials: Arc<SecureCredentialManager>,
    api_key: &str,
    http: Client,
    config: &ArixConfig,
) -> Result<Arc<dyn ModelProvider>, ProviderError> {
    use aprovider::adapters::gemini::{GeminiHttpTransport, GeminiProvider};

    credentials.set_gemini_api_key(api_key)?;
    let mut transport = GeminiHttpTransport::new(http);
    if let Some(base_url) = &config.base_url {
        transport = transport.with_base_url(base_url.clone());
    }

    Ok(Arc::new(
        GeminiProvider::new(credentials, Arc::new(transport)).with_fallback_model(&config.model),
    ))
}

#[cfg(not(feature = "provider-gemini"))]
fn build_gemini_provider(
    _credentials: Arc<SecureCredentialManager>,
    _api_key: &str,
    _http: Client,
    _config: &ArixConfig,
) -> Result<Arc<dyn ModelProvider>, ProviderError> {
    Err(ProviderError::invalid_request(
        "provider-gemini feature is not enabled on arix",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn blank_api_key_is_rejected() {
        let err = build_provider_from_api_key("   ")
            .err()
            .expect("blank key must fail");
        assert_eq!(err.kind, ProviderErrorKind::Authentication);
    }

    #[cfg(feature = "provider-gemini")]
    #[test]
    fn config_builds_gemini_provider() {
        use std::time::Duration;

        use crate::ProviderId;

        let config = ArixConfig::new("AIza-key")
            .with_base_url("http://localhost:9000/v1beta")
            .with_timeout(Duration::from_secs(5));

        let provider = build_provider_with_config(&config).expect("provider should build");
        assert_eq!(provider.id(), ProviderId::Gemini);
    }
}
