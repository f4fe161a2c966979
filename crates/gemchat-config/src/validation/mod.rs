//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;


use crate::schema::GemchatConfig;
use gemchat_common::ConfigError;

use helpers::{validate_non_empty, validate_url_scheme};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GemchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_api(&mut errors, config);
    validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_api(errors: &mut Vec<String>, config: &GemchatConfig) {
    validate_url_scheme(errors, "api.base_url", &config.api.base_url);
    validate_non_empty(errors, "api.model", &config.api.model);
    if config.api.model.contains('/') || config.api.model.contains(':') {
        errors.push(format!(
            "api.model = {:?} must be a bare model name",
            config.api.model
        ));
    }
}

fn validate_chat(errors: &mut Vec<String>, config: &GemchatConfig) {
    validate_non_empty(errors, "chat.prompt", &config.chat.prompt);
    validate_non_empty(errors, "chat.welcome_message", &config.chat.welcome_message);
    validate_non_empty(errors, "chat.new_chat_message", &config.chat.new_chat_message);
}
