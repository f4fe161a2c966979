//! Submitting user turns and recording replies.

use tracing::{debug, warn};

use crate::{ChatBackend, FetchError, Turn};

use super::manager::ConversationSession;
use super::types::{PendingReply, ReplyTicket, SessionState};

impl ConversationSession {
    /// Append a user turn and hand out the request to run for it.
    ///
    /// Returns `None` and changes nothing when a reply is already awaited,
    /// when there is no credential, or when `text` is blank.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingReply> {
        if self.state != SessionState::Idle {
            debug!("submit ignored: awaiting reply");
            return None;
        }
        let Some(credential) = self.credential.clone() else {
            debug!("submit ignored: no credential");
            return None;
        };
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.turns.push(Turn::user(text));
        self.state = SessionState::AwaitingReply;

        Some(PendingReply {
            ticket: ReplyTicket {
                generation: self.generation,
            },
            credential,
            turns: self.turns.clone(),
        })
    }

    /// Record the outcome of the request issued for `ticket` and return to
    /// `Idle`. A failure becomes a model turn reading `Error: <message>`.
    ///
    /// Returns `false` when the conversation was cleared after the request
    /// was issued; the outcome is then dropped.
    pub fn complete(&mut self, ticket: ReplyTicket, result: Result<String, FetchError>) -> bool {
        self.state = SessionState::Idle;

        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "dropping reply for a cleared conversation"
            );
            return false;
        }

        let text = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("reply request failed: {e}");
                format!("Error: {e}")
            }
        };
        self.turns.push(Turn::model(text));
        true
    }

    /// Submit `text` and wait for the reply. A no-op under the same
    /// conditions as `begin_submit`.
    pub async fn submit(&mut self, backend: &dyn ChatBackend, text: &str) {
        let Some(pending) = self.begin_submit(text) else {
            return;
        };
        let result = backend.fetch(&pending.credential, &pending.turns).await;
        self.complete(pending.ticket, result);
    }
}
