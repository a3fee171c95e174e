use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{CaptionError, Result};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "captionfix.toml";

fn default_table_path() -> PathBuf {
    PathBuf::from("replacements.json")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_file_prefix() -> String {
    "lrc_process".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub replacements: ReplacementsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementsConfig {
    /// Path to the JSON replacement table
    #[serde(default = "default_table_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory receiving one log file per run
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
    /// Log file name prefix; a `_YYYYmmdd_HHMMSS.log` suffix is appended
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ReplacementsConfig {
    fn default() -> Self {
        Self {
            path: default_table_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CaptionError::Config(format!("Failed to read settings file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| CaptionError::Config(format!("Failed to parse settings file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CaptionError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| CaptionError::Config(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Explicit file if given, else `captionfix.toml` in the working directory, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => Self::from_file(DEFAULT_SETTINGS_FILE),
            None => Ok(Self::default()),
        }
    }
}
