//! Session state and the hand-off between a session and its in-flight request.

use gemchat_common::Credential;

use crate::Turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Exactly one request is outstanding.
    AwaitingReply,
}

/// Identifies the request a reply belongs to. Carries the conversation
/// generation current at submit time, so replies that outlive a `clear`
/// can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    pub(super) generation: u64,
}

/// Everything needed to run one request outside the session.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub(super) ticket: ReplyTicket,
    pub(super) credential: Credential,
    pub(super) turns: Vec<Turn>,
}

impl PendingReply {
    pub fn ticket(&self) -> ReplyTicket {
        self.ticket
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The full history, ending with the just-submitted user turn.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}
