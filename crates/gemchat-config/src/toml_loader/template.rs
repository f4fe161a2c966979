//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# gemchat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# model = "gemini-2.5-flash"

[chat]
# welcome_message = "Hi! I'm your Gemini assistant. Ask me anything."
# new_chat_message = "New chat. How can I help?"
# prompt = ">>> "

[storage]
# path = "/path/to/storage.json"   # default: <data dir>/gemchat/storage.json

[logging]
# level = "WARNING"      # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
