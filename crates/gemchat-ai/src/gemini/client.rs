//! Gemini API client struct, request building, and response parsing.

use crate::{FetchError, Turn};

use super::config::GeminiConfig;

pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.95;
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    /// Uses the transport's default timeouts; none are added here.
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    pub fn with_http(config: GeminiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Endpoint URL without the `key` query parameter.
    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// Every turn is sent, in order, with its origin as the role.
    pub(crate) fn build_request_body(turns: &[Turn]) -> serde_json::Value {
        let contents: Vec<_> = turns
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.origin().as_role(),
                    "parts": [{ "text": turn.text() }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topP": TOP_P,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        })
    }

    /// Extract `candidates[0].content.parts[0].text` from a response body.
    pub(crate) fn parse_response(body: &str) -> Result<String, FetchError> {
        let json: serde_json::Value =
            serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

        match json["candidates"][0]["content"]["parts"][0]["text"].as_str() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(FetchError::EmptyResponse),
        }
    }
}
