//! User settings for Splitly
//!
//! Manages user preferences: the member commands act as by default, and how
//! amounts and dates are formatted.

use serde::{Deserialize, Serialize};

use super::paths::SplitlyPaths;
use crate::error::SplitlyError;
use crate::storage::write_json_atomic;
use crate::models::MemberId;

/// User settings for Splitly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Member that commands act as when `--as` is omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_member: Option<MemberId>,

    /// Currency symbol prefixed to displayed amounts
    #[serde(default)]
    pub currency_symbol: String,

    /// Date format for expense listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            active_member: None,
            currency_symbol: String::new(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SplitlyPaths) -> Result<Self, SplitlyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SplitlyError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SplitlyError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk, replacing the file atomically
    pub fn save(&self, paths: &SplitlyPaths) -> Result<(), SplitlyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
