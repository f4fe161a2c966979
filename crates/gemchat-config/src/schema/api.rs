//! Generative Language API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where requests are sent.
///
/// Generation parameters (temperature, top-p, output length) are fixed in
/// the client and deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL up to and including the `models` path segment.
    pub base_url: String,
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            model: "gemini-2.5-flash".into(),
        }
    }
}
