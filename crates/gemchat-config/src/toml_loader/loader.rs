//! Reading the TOML file, or the default one.

use std::io::ErrorKind;
use std::path::Path;

use gemchat_common::ConfigError;
use tracing::{debug, info};

use crate::schema::GemchatConfig;

use super::paths::{create_default_config, default_config_path};

/// Parse the TOML file at `path`. Missing keys take their defaults.
///
/// Only syntax and types are checked here; `validation::validate` covers
/// the values.
pub fn load_from_path(path: &Path) -> Result<GemchatConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;

    let config = toml::from_str::<GemchatConfig>(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `<config dir>/gemchat/config.toml`, writing the commented template
/// there first if the file is missing.
pub fn load_default() -> Result<GemchatConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }

    create_default_config(&path)?;
    info!(path = %path.display(), "wrote default config");
    Ok(GemchatConfig::default())
}
