//! Conversation core for gemchat.
//!
//! - `Turn`: one message of the conversation, from the user or the model
//! - `ChatBackend`: one request/response exchange for a whole history
//! - `GeminiClient`: `ChatBackend` over the Generative Language API
//! - `ConversationSession`: the turn log and its single in-flight request

pub mod gemini;
pub mod session;

use async_trait::async_trait;
use gemchat_common::{new_id, Credential};

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ConversationSession, PendingReply, ReplyTicket, SessionState};

/// Sends a conversation and returns the model's reply.
///
/// One call is exactly one network request: no retries, no streaming.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn fetch(&self, credential: &Credential, turns: &[Turn]) -> Result<String, FetchError>;
}

/// Who wrote a turn. Serializes to the wire role name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Model,
}

impl Origin {
    pub fn as_role(self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Model => "model",
        }
    }
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    id: String,
    origin: Origin,
    text: String,
}

impl Turn {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            origin,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Origin::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Origin::Model, text)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Gemini API error: {status} {body}")]
    Status { status: u16, body: String },
    #[error("Empty response from Gemini")]
    EmptyResponse,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
