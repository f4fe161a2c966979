//! Text shown by the chat REPL.

use gemchat_ai::{Origin, Turn};

pub const HELP: &str = "\
Commands:
  /new   - Start a new chat
  /key   - Change the API key
  /help  - Show this help
  /quit  - Exit";

pub const SETUP_INTRO: &str = "\
Enter your Gemini API key to start chatting.
Don't have a key? Create one in Google AI Studio, enable the Generative
Language API, and paste it here. The key is stored locally only.";

pub const SETUP_PROMPT: &str = "API key: ";

pub const STILL_WAITING: &str = "Still waiting for the previous reply. Send again once it arrives.";

pub fn format_turn(turn: &Turn) -> String {
    let label = match turn.origin() {
        Origin::User => "you",
        Origin::Model => "gemini",
    };
    format!("{label}: {}", turn.text())
}
