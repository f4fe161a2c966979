//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoping this level to the gemchat crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "gemchat=debug",
            LogLevel::Info => "gemchat=info",
            LogLevel::Warning => "gemchat=warn",
            LogLevel::Error => "gemchat=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
