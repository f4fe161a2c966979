//! Local storage configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Location of the key-value file holding the API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StorageConfig {
    /// Overrides `<data_dir>/gemchat/storage.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
