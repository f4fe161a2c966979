pub mod crash_report;
pub mod credential_store;
pub mod paths;
pub mod storage;

pub use credential_store::{CredentialStore, CREDENTIAL_KEY};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, history_file, storage_file};
pub use storage::LocalStorage;
