use std::path::PathBuf;

use gemchat_common::PlatformError;

pub(super) const APP_NAME: &str = "gemchat";

/// Returns the platform-specific configuration directory for gemchat.
///
/// - macOS: `~/Library/Application Support/gemchat`
/// - Linux: `$XDG_CONFIG_HOME/gemchat` (defaults to `~/.config/gemchat`)
/// - Windows: `%APPDATA%\gemchat`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for gemchat.
///
/// - macOS: `~/Library/Application Support/gemchat`
/// - Linux: `$XDG_DATA_HOME/gemchat` (defaults to `~/.local/share/gemchat`)
/// - Windows: `%APPDATA%\gemchat`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the local key-value storage file.
///
/// Located at `data_dir()/storage.json`.
pub fn storage_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("storage.json"))
}

/// Returns the path to the REPL input history.
pub fn history_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("history.txt"))
}

/// Returns the path to the crash report directory.
///
/// Located at `data_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("crash-reports"))
}
