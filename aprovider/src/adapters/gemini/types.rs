//! Gemini adapter types and provider-agnostic conversion logic.

use std::fmt::Formatter;

use acommon::GenerationOptions;

use crate::{Candidate, Content, ModelResponse, Part, ProviderId, Role, SecretString};

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiRequest {
    pub model: String,
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiContent {
    pub role: GeminiRole,
    pub text: String,
}

impl From<Content> for GeminiContent {
    fn from(value: Content) -> Self {
        Self {
            role: value.role.into(),
            text: value.text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiRole {
    User,
    Model,
}

impl GeminiRole {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

impl From<Role> for GeminiRole {
    fn from(value: Role) -> Self {
        match value {
            Role::User => Self::User,
            Role::Model => Self::Model,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeminiGenerationConfig {
    pub response_mime_type: Option<String>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GeminiGenerationConfig {
    pub(crate) fn is_empty(&self) -> bool {
        self.response_mime_type.is_none()
            && self.temperature.is_none()
            && self.max_output_tokens.is_none()
    }
}

impl From<GenerationOptions> for GeminiGenerationConfig {
    fn from(value: GenerationOptions) -> Self {
        Self {
            response_mime_type: value.response_mime_type,
            temperature: value.temperature,
            max_output_tokens: value.max_output_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeminiCandidate {
    /// Text of each part; `None` for parts without text (e.g. inline data).
    pub parts: Vec<Option<String>>,
    pub finish_reason: Option<String>,
}

impl From<GeminiCandidate> for Candidate {
    fn from(value: GeminiCandidate) -> Self {
        Self {
            parts: value
                .parts
                .into_iter()
                .map(|text| Part { text })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeminiResponse {
    pub model_version: Option<String>,
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    pub(crate) fn into_model_response(self, requested_model: String) -> ModelResponse {
        ModelResponse {
            provider: ProviderId::Gemini,
            model: self.model_version.unwrap_or(requested_model),
            candidates: self.candidates.into_iter().map(Candidate::from).collect(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum GeminiAuth {
    ApiKey(SecretString),
}

impl GeminiAuth {
    pub(crate) fn api_key(&self) -> &str {
        match self {
            Self::ApiKey(key) => key.expose(),
        }
    }
}

impl std::fmt::Debug for GeminiAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("GeminiAuth::ApiKey([REDACTED])"),
        }
    }
}
