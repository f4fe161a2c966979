pub mod credential;
pub mod errors;
pub mod id;

pub use credential::{Credential, CredentialError};
pub use errors::{ConfigError, GemchatError, PlatformError, StorageError};
pub use id::{new_id, SessionId};

pub type Result<T> = std::result::Result<T, GemchatError>;
