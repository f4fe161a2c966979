//! Conversation session management.
//!
//! A `ConversationSession` owns the ordered turn log and allows at most
//! one reply request in flight. Submitting is split so the caller can keep
//! using the session (for example to clear it) while a request runs:
//! `begin_submit` appends the user turn and hands out a `PendingReply`,
//! and `complete` records the outcome.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::{ConversationSession, DEFAULT_NEW_CHAT_MESSAGE, DEFAULT_WELCOME_MESSAGE};
pub use types::{PendingReply, ReplyTicket, SessionState};
