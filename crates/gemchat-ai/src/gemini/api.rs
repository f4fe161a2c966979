//! ChatBackend implementation for GeminiClient.

use async_trait::async_trait;
use gemchat_common::Credential;
use tracing::debug;

use crate::{ChatBackend, FetchError, Turn};

use super::client::GeminiClient;

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn fetch(&self, credential: &Credential, turns: &[Turn]) -> Result<String, FetchError> {
        let body = Self::build_request_body(turns);

        debug!(model = %self.config.model, turns = turns.len(), "Gemini API request");

        // The key travels in the query string, as the API expects. Errors
        // are stripped of the URL so it never ends up in a turn or a log.
        let response = self
            .http
            .post(self.api_url())
            .query(&[("key", credential.expose())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Gemini API error response");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let reply = Self::parse_response(&text)?;
        debug!(chars = reply.len(), "Gemini API reply");
        Ok(reply)
    }
}
