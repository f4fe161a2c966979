//! Where the config file lives, and writing the template there.

use std::path::{Path, PathBuf};

use gemchat_common::ConfigError;

use super::template::default_config_toml;

const CONFIG_FILE: &str = "config.toml";

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("gemchat").join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err =
        |e: std::io::Error| ConfigError::ParseError(format!("cannot write {}: {e}", path.display()));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_err)
}
