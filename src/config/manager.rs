//! Configuration manager for loading and saving application configuration
//!
//! This module provides functionality to load and save configuration to
//! `$XDG_CONFIG_HOME/spinbox/config.json` (falling back to
//! `$HOME/.config/spinbox/config.json`) with atomic writes to prevent
//! corruption.

use crate::config::models::AppConfig;
use crate::error::{Result, SpinboxError, StringError};
use std::path::PathBuf;
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the directory holding configuration and log files
    ///
    /// Returns `$XDG_CONFIG_HOME/spinbox`, or `$HOME/.config/spinbox` when
    /// `XDG_CONFIG_HOME` is unset or empty.
    pub fn config_dir() -> PathBuf {
        match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("spinbox"),
            _ => {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".config").join("spinbox")
            }
        }
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_dir = Self::config_dir();
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default
    /// configuration.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_path = Self::get_config_path();
        Self::ensure_config_dir()?;

        let config_dir = config_path
            .parent()
            .ok_or_else(|| SpinboxError::Config(StringError::new("Invalid config path")))?;

        // Atomic write: write to temp file, then rename
        let temp_path = config_dir.join("config.json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, config_path)?;

        info!("Configuration saved successfully");
        Ok(())
    }
}
