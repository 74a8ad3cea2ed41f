use std::env;
use std::path::PathBuf;

use lazy_regex::regex_is_match;

use crate::error::AppError;

pub const DEFAULT_DATA_DIR: &str = ".scorekeeper";
/// Slot name used by the legacy browser build.
pub const DEFAULT_SLOT: &str = "cardGameDataV3";

pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
pub const SLOT_VAR: &str = "SCOREKEEPER_SLOT";

/// Where the save slot lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub slot: String,
}

impl StorageConfig {
    /// Resolve from explicit overrides, then environment, then defaults.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        slot: Option<String>,
    ) -> Result<Self, AppError> {
        let data_dir = data_dir
            .or_else(|| env::var_os(DATA_DIR_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let slot = slot
            .or_else(|| env::var(SLOT_VAR).ok())
            .unwrap_or_else(|| DEFAULT_SLOT.to_string());

        validate_slot(&slot)?;
        if data_dir.as_os_str().is_empty() {
            return Err(AppError::config(format!("{DATA_DIR_VAR} must not be empty")));
        }

        Ok(Self { data_dir, slot })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::resolve(None, None)
    }
}

/// Slot names become file names, so keep them to a safe alphabet.
fn validate_slot(slot: &str) -> Result<(), AppError> {
    if !regex_is_match!(r"^[A-Za-z0-9_-]{1,64}$", slot) {
        return Err(AppError::config(format!(
            "Invalid slot name '{slot}': use 1-64 letters, digits, '_' or '-'"
        )));
    }
    Ok(())
}
