//! User-level configuration loaded from `~/.syllabus/config.toml`.
//!
//! The file is optional; missing fields fall back to their defaults. CLI
//! flags and environment variables take precedence over it.

use crate::utils::{default_data_dir, get_syllabus_home};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Where lessons and sections are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One Markdown file per record under the data directory.
    #[default]
    Markdown,
    /// Process memory; everything is lost on exit.
    Memory,
}

/// `[storage]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Defaults to `~/.syllabus/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[must_use]
pub fn user_config_path() -> PathBuf {
    get_syllabus_home().join("config.toml")
}

/// Load `~/.syllabus/config.toml`; defaults when the file does not exist.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    load_user_config_from(&user_config_path())
}

pub fn load_user_config_from(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "User config not found; using defaults");
        return Ok(UserConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!(path = %path.display(), "Loaded user config");
    Ok(config)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod user_config_tests;
