//! User settings for the pwseal CLI
//!
//! None of these influence the cryptography. They only control how the CLI
//! presents envelopes and how chatty it is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::SealPaths;
use crate::error::SealError;

/// Document format used to write and read envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeFormat {
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for EnvelopeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnvelopeFormat::Json => "json",
            EnvelopeFormat::Yaml => "yaml",
        })
    }
}

impl FromStr for EnvelopeFormat {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(EnvelopeFormat::Json),
            "yaml" | "yml" => Ok(EnvelopeFormat::Yaml),
            other => Err(SealError::Config(format!(
                "Unknown envelope format '{}' (expected json or yaml)",
                other
            ))),
        }
    }
}

/// User settings for pwseal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Format used when no `--format` flag is given
    #[serde(default)]
    pub envelope_format: EnvelopeFormat,

    /// Log filter used when `RUST_LOG` is unset and `--verbose` is off
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Ask for the password twice when encrypting interactively
    #[serde(default = "default_confirm_password")]
    pub confirm_password: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_confirm_password() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            envelope_format: EnvelopeFormat::default(),
            log_level: default_log_level(),
            confirm_password: default_confirm_password(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SealPaths) -> Result<Self, SealError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SealError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SealError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SealPaths) -> Result<(), SealError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SealError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SealError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
