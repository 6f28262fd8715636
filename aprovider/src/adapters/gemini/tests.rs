//! Focused unit tests for Gemini adapter internals.

#![cfg(test)]

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use crate::{
    Content, ModelRequest, ProviderError, ProviderErrorKind, ProviderFuture,
    SecureCredentialManager,
};

use super::provider::GeminiProvider;
use super::serde_api::{build_api_request, extract_error_message, parse_response_body};
use super::transport::{GeminiHttpTransport, GeminiTransport, map_status_error};
use super::types::{
    GeminiAuth, GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiResponse, GeminiRole,
};

#[derive(Debug)]
struct NoopTransport;

impl GeminiTransport for NoopTransport {
    fn generate_content<'a>(
        &'a self,
        _request: GeminiRequest,
        _auth: GeminiAuth,
    ) -> ProviderFuture<'a, Result<GeminiResponse, ProviderError>> {
        Box::pin(async { Err(ProviderError::other("not used")) })
    }
}

#[test]
fn build_api_request_serializes_contents_and_plain_text_config() {
    let request = GeminiRequest {
        model: "gemini-2.5-pro".to_string(),
        contents: vec![
            GeminiContent {
                role: GeminiRole::User,
                text: "Hi".to_string(),
            },
            GeminiContent {
                role: GeminiRole::Model,
                text: "Hello!".to_string(),
            },
        ],
        generation_config: GeminiGenerationConfig {
            response_mime_type: Some("text/plain".to_string()),
            ..GeminiGenerationConfig::default()
        },
    };

    let api_request = build_api_request(request).expect("request should build");
    let value = serde_json::to_value(&api_request).expect("request should serialize");

    assert_eq!(
        value,
        json!({
            "contents": [
                {"role": "user", "parts": [{"text": "Hi"}]},
                {"role": "model", "parts": [{"text": "Hello!"}]}
            ],
            "generationConfig": {"responseMimeType": "text/plain"}
        })
    );
}

#[test]
fn build_api_request_omits_empty_generation_config() {
    let request = GeminiRequest {
        model: "gemini-2.5-pro".to_string(),
        contents: vec![GeminiContent {
            role: GeminiRole::User,
            text: "Hi".to_string(),
        }],
        generation_config: GeminiGenerationConfig::default(),
    };

    let value = serde_json::to_value(build_api_request(request).expect("request should build"))
        .expect("request should serialize");
    assert!(value.get("generationConfig").is_none());
}

#[test]
fn build_api_request_rejects_empty_contents() {
    let request = GeminiRequest {
        model: "gemini-2.5-pro".to_string(),
        contents: Vec::new(),
        generation_config: GeminiGenerationConfig::default(),
    };

    let err = build_api_request(request).expect_err("empty contents must fail");
    assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
}

#[test]
fn parse_response_body_reads_candidates_and_model_version() {
    let body = r#"{
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": "Hello!"}, {"text": "more"}]}, "finishReason": "STOP"}
        ],
        "modelVersion": "gemini-2.5-pro-002"
    }"#;

    let response = parse_response_body(body).expect("body should parse");
    assert_eq!(response.model_version.as_deref(), Some("gemini-2.5-pro-002"));
    assert_eq!(response.candidates.len(), 1);
    assert_eq!(
        response.candidates[0].parts,
        vec![Some("Hello!".to_string()), Some("more".to_string())]
    );
    assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
}

#[test]
fn parse_response_body_tolerates_missing_structure() {
    let no_candidates = parse_response_body("{}").expect("empty object should parse");
    assert!(no_candidates.candidates.is_empty());

    let empty_candidates =
        parse_response_body(r#"{"candidates": []}"#).expect("empty list should parse");
    assert!(empty_candidates.candidates.is_empty());

    let blocked = parse_response_body(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#)
        .expect("blocked candidate should parse");
    assert_eq!(blocked.candidates.len(), 1);
    assert!(blocked.candidates[0].parts.is_empty());

    let textless = parse_response_body(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#)
        .expect("textless part should parse");
    assert_eq!(textless.candidates[0].parts, vec![None]);
}

#[test]
fn parse_response_body_flags_malformed_json() {
    let err = parse_response_body("<html>bad gateway</html>").expect_err("html must fail");
    assert_eq!(err.kind, ProviderErrorKind::InvalidResponse);
}

#[test]
fn extract_error_message_reads_google_error_envelope() {
    let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
    assert_eq!(
        extract_error_message(body).as_deref(),
        Some("API key not valid.")
    );
    assert_eq!(extract_error_message("not json"), None);
}

#[test]
fn map_status_error_classifies_http_statuses() {
    let cases = [
        (StatusCode::UNAUTHORIZED, ProviderErrorKind::Authentication),
        (StatusCode::FORBIDDEN, ProviderErrorKind::Authentication),
        (StatusCode::TOO_MANY_REQUESTS, ProviderErrorKind::RateLimited),
        (StatusCode::GATEWAY_TIMEOUT, ProviderErrorKind::Timeout),
        (StatusCode::BAD_REQUEST, ProviderErrorKind::InvalidRequest),
        (StatusCode::SERVICE_UNAVAILABLE, ProviderErrorKind::Unavailable),
        (StatusCode::INTERNAL_SERVER_ERROR, ProviderErrorKind::Transport),
    ];

    for (status, expected) in cases {
        let err = map_status_error(status, "boom".to_string());
        assert_eq!(err.kind, expected, "status {status}");
        assert_eq!(err.message, "boom");
    }
}

#[test]
fn endpoint_targets_generate_content_for_model() {
    let transport = GeminiHttpTransport::new(reqwest::Client::new())
        .with_base_url("http://localhost:8080/v1beta/");

    assert_eq!(
        transport.endpoint("gemini-2.5-flash"),
        "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
    );
}

#[test]
fn build_gemini_request_uses_fallback_model_when_blank() {
    let provider = GeminiProvider::new(
        Arc::new(SecureCredentialManager::new()),
        Arc::new(NoopTransport),
    )
    .with_fallback_model("gemini-2.5-flash");

    let request = ModelRequest::new("  ", vec![Content::user("hi")]);
    let built = provider.build_gemini_request(request);

    assert_eq!(built.model, "gemini-2.5-flash");
    assert_eq!(built.contents[0].role, GeminiRole::User);
    assert_eq!(
        built.generation_config.response_mime_type.as_deref(),
        Some("text/plain")
    );
}

#[test]
fn gemini_auth_debug_is_redacted() {
    let auth = GeminiAuth::ApiKey(crate::SecretString::new("AIza-secret"));
    assert_eq!(format!("{auth:?}"), "GeminiAuth::ApiKey([REDACTED])");
}
