//! Interactive chat.
//!
//! One event loop owns the session. It waits on two sources: lines from the
//! input thread and replies from spawned fetch tasks. Because a reply is
//! applied only when it arrives, `/new` and `/quit` stay usable while a
//! request is outstanding.

mod input;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use gemchat_ai::{ChatBackend, ConversationSession, FetchError, ReplyTicket};
use gemchat_common::{Result, SessionId};
use gemchat_platform::CredentialStore;
use tokio::sync::mpsc;
use tracing::{debug, info, info_span, Instrument};

use input::{Input, LineReader, Prompt};

const DEFAULT_PROMPT: &str = ">>> ";

type Reply = (ReplyTicket, std::result::Result<String, FetchError>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// No usable key yet; lines are taken as key candidates.
    Setup,
    Chat,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct ChatRepl {
    session: ConversationSession,
    store: CredentialStore,
    backend: Arc<dyn ChatBackend>,
    prompt: String,
    mode: Mode,
    replies_tx: mpsc::UnboundedSender<Reply>,
    replies_rx: mpsc::UnboundedReceiver<Reply>,
}

impl ChatRepl {
    /// Starts in key setup when the session has no credential.
    pub fn new(
        session: ConversationSession,
        store: CredentialStore,
        backend: Arc<dyn ChatBackend>,
    ) -> Self {
        let mode = if session.has_credential() {
            Mode::Chat
        } else {
            Mode::Setup
        };
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        Self {
            session,
            store,
            backend,
            prompt: DEFAULT_PROMPT.to_string(),
            mode,
            replies_tx,
            replies_rx,
        }
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    /// Run until `/quit` or end of input. History is read from and saved
    /// to `history` when given.
    pub async fn run(self, history: Option<PathBuf>) -> Result<()> {
        let id = SessionId::new();
        self.event_loop(history)
            .instrument(info_span!("chat", session = %id))
            .await
    }

    async fn event_loop(mut self, history: Option<PathBuf>) -> Result<()> {
        let mut reader = LineReader::spawn(history)?;
        info!("chat started");

        self.print_intro();
        reader.request(self.next_prompt());

        let outcome = loop {
            tokio::select! {
                input = reader.next() => {
                    let flow = match input {
                        Input::Line(line) => self.handle_line(&line),
                        Input::Interrupted => {
                            println!("(type /quit to exit)");
                            Flow::Continue
                        }
                        Input::Eof => Flow::Quit,
                        Input::Failed(e) => break Err(e.into()),
                    };
                    if flow == Flow::Quit {
                        break Ok(());
                    }
                    reader.request(self.next_prompt());
                }
                Some((ticket, result)) = self.replies_rx.recv() => {
                    self.handle_reply(ticket, result);
                }
            }
        };

        reader.finish();
        info!("chat ended");
        outcome
    }

    fn next_prompt(&self) -> Prompt {
        match self.mode {
            Mode::Setup => Prompt {
                text: render::SETUP_PROMPT.to_string(),
                secret: true,
            },
            Mode::Chat => Prompt {
                text: self.prompt.clone(),
                secret: false,
            },
        }
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let line = line.trim();
        if matches!(line, "/quit" | "/exit") {
            return Flow::Quit;
        }
        match self.mode {
            Mode::Setup => self.handle_setup(line),
            Mode::Chat => self.handle_chat(line),
        }
        Flow::Continue
    }

    fn handle_setup(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if line.starts_with('/') {
            println!("Enter your API key, or /quit to exit.");
            return;
        }
        match self.store.set(line) {
            Ok(credential) => {
                self.session.set_credential(Some(credential));
                self.mode = Mode::Chat;
                println!("API key saved.\n");
                self.print_transcript();
            }
            Err(e) => println!("{e}"),
        }
    }

    fn handle_chat(&mut self, line: &str) {
        match line {
            "" => {}
            "/new" => {
                self.session.clear();
                self.print_transcript();
            }
            "/key" => {
                self.store.clear();
                self.session.set_credential(None);
                self.session.clear();
                self.mode = Mode::Setup;
                println!("{}", render::SETUP_INTRO);
            }
            "/help" => println!("{}", render::HELP),
            cmd if cmd.starts_with('/') => {
                println!("Unknown command: {cmd}");
                println!("Type /help for available commands");
            }
            text => self.submit(text),
        }
    }

    fn submit(&mut self, text: &str) {
        if self.session.is_awaiting_reply() {
            println!("{}", render::STILL_WAITING);
            return;
        }
        let Some(pending) = self.session.begin_submit(text) else {
            return;
        };
        println!("Thinking...");

        let backend = Arc::clone(&self.backend);
        let replies = self.replies_tx.clone();
        tokio::spawn(
            async move {
                let result = backend.fetch(pending.credential(), pending.turns()).await;
                let _ = replies.send((pending.ticket(), result));
            }
            .in_current_span(),
        );
    }

    fn handle_reply(&mut self, ticket: ReplyTicket, result: std::result::Result<String, FetchError>) {
        if !self.session.complete(ticket, result) {
            debug!("reply discarded after /new");
            return;
        }
        if self.mode == Mode::Chat {
            if let Some(turn) = self.session.last_turn() {
                println!("\n{}\n", render::format_turn(turn));
            }
        }
    }

    fn print_intro(&self) {
        match self.mode {
            Mode::Setup => println!("{}\n", render::SETUP_INTRO),
            Mode::Chat => {
                println!("Type /help for commands.\n");
                self.print_transcript();
            }
        }
    }

    fn print_transcript(&self) {
        for turn in self.session.turns() {
            println!("{}\n", render::format_turn(turn));
        }
    }
}
