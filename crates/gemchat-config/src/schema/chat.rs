//! Chat REPL configuration types.

use serde::{Deserialize, Serialize};

/// Seed messages and REPL prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Model turn seeded when the conversation starts.
    pub welcome_message: String,
    /// Model turn seeded after `/new`.
    pub new_chat_message: String,
    pub prompt: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome_message: "Hi! I'm your Gemini assistant. Ask me anything.".into(),
            new_chat_message: "New chat. How can I help?".into(),
            prompt: ">>> ".into(),
        }
    }
}
