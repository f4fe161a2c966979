//! Session struct and turn-log management.

use gemchat_common::Credential;
use tracing::debug;

use crate::Turn;

use super::types::SessionState;

pub const DEFAULT_WELCOME_MESSAGE: &str = "Hi! I'm your Gemini assistant. Ask me anything.";
pub const DEFAULT_NEW_CHAT_MESSAGE: &str = "New chat. How can I help?";

/// A conversation with its turn log and request state.
pub struct ConversationSession {
    /// Ordered, append-only turn log. Always starts with a seeded model turn.
    pub(super) turns: Vec<Turn>,
    pub(super) state: SessionState,
    /// Key used for requests; submissions are ignored while absent.
    pub(super) credential: Option<Credential>,
    /// Bumped by `clear`; replies tagged with an older value are dropped.
    pub(super) generation: u64,
    /// Text seeded after `clear`.
    pub(super) new_chat_message: String,
}

impl ConversationSession {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            turns: vec![Turn::model(DEFAULT_WELCOME_MESSAGE)],
            state: SessionState::Idle,
            credential,
            generation: 0,
            new_chat_message: DEFAULT_NEW_CHAT_MESSAGE.to_string(),
        }
    }

    /// Replace the seeded opening turn. Meant for construction, before use.
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.turns = vec![Turn::model(message)];
        self
    }

    pub fn with_new_chat_message(mut self, message: impl Into<String>) -> Self {
        self.new_chat_message = message.into();
        self
    }

    /// Start over with a single freshly seeded model turn.
    ///
    /// An in-flight request is not cancelled; its reply will be discarded
    /// when it arrives, and only then does the session become idle again.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.turns = vec![Turn::model(self.new_chat_message.clone())];
        debug!(
            generation = self.generation,
            in_flight = self.is_awaiting_reply(),
            "conversation cleared"
        );
    }

    pub fn set_credential(&mut self, credential: Option<Credential>) {
        self.credential = credential;
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Get the full conversation history.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of turns in history.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state == SessionState::AwaitingReply
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(None)
    }
}
