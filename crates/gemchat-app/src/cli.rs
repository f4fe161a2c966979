use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gemchat: chat with Google's Gemini models from the terminal.
#[derive(Parser, Debug)]
#[command(name = "gemchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `gemchat=debug`). Overrides the config.
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (the default).
    Chat,

    /// Send a single message and print the reply.
    Ask {
        /// Message text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Manage the stored API key.
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Store a new API key.
    ///
    /// Omit KEY to be prompted without echo. A key given on the command
    /// line is kept in your shell history.
    Set { key: Option<String> },

    /// Report whether a key is stored.
    Status,

    /// Remove the stored key.
    Clear,
}

pub fn parse() -> Args {
    Args::parse()
}
