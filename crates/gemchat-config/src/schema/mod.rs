//! Configuration schema types for gemchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod chat;
mod storage;
mod system;

pub use api::*;
pub use chat::*;
pub use storage::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for gemchat.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GemchatConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
