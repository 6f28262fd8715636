//! Gemini HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::ProviderError;

use super::types::{GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiResponse};

pub(crate) fn build_api_request(request: GeminiRequest) -> Result<GeminiApiRequest, ProviderError> {
    if request.contents.is_empty() {
        return Err(ProviderError::invalid_request(
            "Gemini request requires at least one content entry",
        ));
    }

    let contents = request
        .contents
        .into_iter()
        .map(GeminiApiContent::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let generation_config = if request.generation_config.is_empty() {
        None
    } else {
        Some(GeminiApiGenerationConfig::from(request.generation_config))
    };

    Ok(GeminiApiRequest {
        contents,
        generation_config,
    })
}

pub(crate) fn parse_response_body(body: &str) -> Result<GeminiResponse, ProviderError> {
    let parsed = serde_json::from_str::<GeminiApiResponse>(body)
        .map_err(|err| ProviderError::invalid_response(err.to_string()))?;

    Ok(GeminiResponse::from(parsed))
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<GeminiApiErrorEnvelope>(body).ok()?;
    Some(parsed.error.message)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiErrorEnvelope {
    pub error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiError {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiRequest {
    pub contents: Vec<GeminiApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiApiGenerationConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiApiContent {
    pub role: String,
    pub parts: Vec<GeminiApiPart>,
}

impl TryFrom<GeminiContent> for GeminiApiContent {
    type Error = ProviderError;

    fn try_from(value: GeminiContent) -> Result<Self, Self::Error> {
        if value.text.trim().is_empty() {
            return Err(ProviderError::invalid_request(
                "Gemini content text must not be empty",
            ));
        }

        Ok(Self {
            role: value.role.as_str().to_string(),
            parts: vec![GeminiApiPart {
                text: Some(value.text),
            }],
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub(crate) struct GeminiApiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl From<GeminiGenerationConfig> for GeminiApiGenerationConfig {
    fn from(value: GeminiGenerationConfig) -> Self {
        Self {
            response_mime_type: value.response_mime_type,
            temperature: value.temperature,
            max_output_tokens: value.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiResponse {
    #[serde(default)]
    pub candidates: Option<Vec<GeminiApiCandidate>>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiCandidate {
    #[serde(default)]
    pub content: Option<GeminiApiResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiResponseContent {
    #[serde(default)]
    pub parts: Option<Vec<GeminiApiPart>>,
}

impl From<GeminiApiResponse> for GeminiResponse {
    fn from(value: GeminiApiResponse) -> Self {
        let candidates = value
            .candidates
            .unwrap_or_default()
            .into_iter()
            .map(|candidate| GeminiCandidate {
                parts: candidate
                    .content
                    .and_then(|content| content.parts)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|part| part.text)
                    .collect(),
                finish_reason: candidate.finish_reason,
            })
            .collect();

        Self {
            model_version: value.model_version,
            candidates,
        }
    }
}
