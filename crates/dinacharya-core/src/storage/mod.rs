//! On-disk configuration and data directory.

mod config;

pub use config::{Config, PlannerConfig, WakeTimesConfig, MAX_CONFIGURABLE_STUDY_HOURS};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/dinacharya[-dev]/` based on DINACHARYA_ENV.
///
/// Set DINACHARYA_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DINACHARYA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dinacharya-dev")
    } else {
        base_dir.join("dinacharya")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
