use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("terminal error: {0}")]
    TerminalError(String),
}

/// Failures of the local key-value storage backing the credential store.
///
/// These are never surfaced to the user; persistence is best-effort.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GemchatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("credential error: {0}")]
    Credential(String),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("{0}")]
    Other(String),
}
