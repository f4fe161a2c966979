//! gemchat configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gemchat_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GemchatConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use gemchat_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template written to it if no file
/// exists yet. An explicit path must exist. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<GemchatConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GemchatConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GemchatConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"api\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"storage\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"gemini-2.5-flash\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let result = load_config(Some(Path::new("/tmp/nonexistent_gemchat/config.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"ftp://example.com\"\n").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nprompt = \"> \"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chat.prompt, "> ");
        assert_eq!(config.api.model, "gemini-2.5-flash");
    }
}
