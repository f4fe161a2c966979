use std::fs;

use gemchat_common::PlatformError;

use super::resolve::{config_dir, crash_report_dir, data_dir};

/// Creates all gemchat directories if they do not already exist.
///
/// Creates: config_dir, data_dir, and crash_report_dir.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(crash_report_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
