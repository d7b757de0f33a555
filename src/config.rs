use crate::host::HostKind;
use crate::intent::PlatformFamily;
use crate::session::DEFAULT_MAX_NUMBER_LENGTH;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "DIALKIT_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Host
    pub host: HostKind,
    pub platform: PlatformFamily,
    pub open_command: String,
    pub query_command: String,

    // Alerts
    pub alerts: String,
    pub ui_language: String,

    // Input
    pub max_number_length: usize,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HostKind::Native,
            platform: PlatformFamily::current(),
            open_command: "xdg-open".to_string(),
            query_command: "xdg-mime".to_string(),
            alerts: "console".to_string(),
            ui_language: crate::i18n::DEFAULT_LANGUAGE.to_string(),
            max_number_length: DEFAULT_MAX_NUMBER_LENGTH,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let (config, source) = Self::load_with_source(path)?;
        source.warn_if_corrupt();
        Ok(config)
    }

    /// Load config from `path`, reporting where the values came from.
    ///
    /// Nothing is logged here, so callers can load before logging is set up
    /// and report the fallback afterwards.
    pub fn load_with_source(path: &Path) -> Result<(Self, ConfigSource)> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Missing));
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok((config, ConfigSource::File)),
            Err(e) => {
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                let backup = std::fs::rename(path, &backup_path)
                    .ok()
                    .map(|_| backup_path);
                Ok((
                    Self::default(),
                    ConfigSource::Corrupt {
                        error: e.to_string(),
                        backup,
                    },
                ))
            }
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Where a loaded [`Config`] came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Parsed from the config file
    File,
    /// No file yet; defaults
    Missing,
    /// File could not be parsed; defaults, original moved to `backup`
    Corrupt {
        error: String,
        backup: Option<PathBuf>,
    },
}

impl ConfigSource {
    /// Graceful degradation: tell the user their file was replaced by defaults
    pub fn warn_if_corrupt(&self) {
        if let ConfigSource::Corrupt { error, backup } = self {
            tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", error);
            if let Some(backup) = backup {
                tracing::warn!("   Original saved as {:?}", backup);
            }
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dialkit")
        .join("config.json")
}
