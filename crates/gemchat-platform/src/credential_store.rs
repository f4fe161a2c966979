//! Persistence of the single Gemini API key.
//!
//! Storage failures never reach the caller: reads fall back to "no key",
//! writes and deletes are logged and dropped.

use gemchat_common::{Credential, CredentialError};
use tracing::{info, warn};

use crate::storage::LocalStorage;

/// Storage key the API key is kept under.
pub const CREDENTIAL_KEY: &str = "GEMINI_API_KEY";

pub struct CredentialStore {
    storage: LocalStorage,
}

impl CredentialStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// The stored key, if one is present and readable.
    pub fn get(&self) -> Option<Credential> {
        match self.storage.get_item(CREDENTIAL_KEY) {
            Ok(value) => value.as_deref().and_then(Credential::from_stored),
            Err(e) => {
                warn!("failed to read stored API key: {e}");
                None
            }
        }
    }

    /// Validate and store `candidate`. Storage is untouched on `InvalidFormat`.
    ///
    /// Returns the accepted key even when writing it failed.
    pub fn set(&self, candidate: &str) -> Result<Credential, CredentialError> {
        let credential = Credential::parse(candidate)?;
        match self.storage.set_item(CREDENTIAL_KEY, credential.expose()) {
            Ok(()) => info!("API key saved"),
            Err(e) => warn!("failed to save API key: {e}"),
        }
        Ok(credential)
    }

    pub fn clear(&self) {
        match self.storage.remove_item(CREDENTIAL_KEY) {
            Ok(()) => info!("API key removed"),
            Err(e) => warn!("failed to remove API key: {e}"),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.get().is_some()
    }
}
