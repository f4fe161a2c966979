//! Command dispatch and the non-interactive commands.

use std::sync::Arc;

use gemchat_ai::{ChatBackend, ConversationSession, GeminiClient, GeminiConfig};
use gemchat_common::{Credential, GemchatError, PlatformError, Result};
use gemchat_config::GemchatConfig;
use gemchat_platform::{CredentialStore, LocalStorage};
use tracing::{debug, info};

use crate::cli::{Command, KeyAction};
use crate::repl::ChatRepl;

pub async fn run(command: Command, config: &GemchatConfig) -> Result<()> {
    if command == Command::Config {
        println!("{}", gemchat_config::config_to_json(config));
        return Ok(());
    }

    let store = CredentialStore::new(open_storage(config)?);

    match command {
        Command::Chat => {
            let session = new_session(config, store.get());
            let repl = ChatRepl::new(session, store, build_backend(config))
                .with_prompt(&config.chat.prompt);
            repl.run(gemchat_platform::history_file().ok()).await
        }
        Command::Ask { text } => {
            let session = new_session(config, store.get());
            let reply = ask(session, build_backend(config).as_ref(), &text.join(" ")).await?;
            println!("{reply}");
            Ok(())
        }
        Command::Key { action } => key(&store, action),
        Command::Config => Ok(()),
    }
}

fn open_storage(config: &GemchatConfig) -> Result<LocalStorage> {
    let storage = match &config.storage.path {
        Some(path) => LocalStorage::new(path),
        None => LocalStorage::open_default()?,
    };
    debug!(path = %storage.path().display(), "using storage file");
    Ok(storage)
}

fn build_backend(config: &GemchatConfig) -> Arc<dyn ChatBackend> {
    let gemini = GeminiConfig::default()
        .with_base_url(&config.api.base_url)
        .with_model(&config.api.model);
    info!(model = %gemini.model, "using Gemini model");
    Arc::new(GeminiClient::new(gemini))
}

fn new_session(config: &GemchatConfig, credential: Option<Credential>) -> ConversationSession {
    ConversationSession::new(credential)
        .with_welcome_message(&config.chat.welcome_message)
        .with_new_chat_message(&config.chat.new_chat_message)
}

/// Submit one message and return the reply text.
///
/// A failed request is still recorded in the session as an error turn,
/// and is returned as an error.
async fn ask(
    mut session: ConversationSession,
    backend: &dyn ChatBackend,
    text: &str,
) -> Result<String> {
    if !session.has_credential() {
        return Err(GemchatError::Credential(
            "no API key stored; run `gemchat key set` first".into(),
        ));
    }
    let pending = session
        .begin_submit(text)
        .ok_or_else(|| GemchatError::Other("nothing to send".into()))?;

    let result = backend.fetch(pending.credential(), pending.turns()).await;
    let failure = result.as_ref().err().map(|e| GemchatError::Ai(e.to_string()));
    session.complete(pending.ticket(), result);

    match failure {
        Some(e) => Err(e),
        None => Ok(session
            .last_turn()
            .map(|turn| turn.text().to_string())
            .unwrap_or_default()),
    }
}

fn key(store: &CredentialStore, action: KeyAction) -> Result<()> {
    match action {
        KeyAction::Set { key } => {
            let candidate = match key {
                Some(key) => key,
                None => read_key()?,
            };
            store
                .set(&candidate)
                .map_err(|e| GemchatError::Credential(e.to_string()))?;
            println!("API key saved.");
        }
        KeyAction::Status => println!("{}", key_status(store)),
        KeyAction::Clear => {
            store.clear();
            println!("API key removed.");
        }
    }
    Ok(())
}

fn key_status(store: &CredentialStore) -> &'static str {
    if store.has_credential() {
        "An API key is stored. Run `gemchat key set` to update it."
    } else {
        "No API key stored. Run `gemchat key set` to add one."
    }
}

fn read_key() -> Result<String> {
    crate::secret::read_secret("API key: ")
        .map_err(|e| PlatformError::TerminalError(e.to_string()).into())
}
