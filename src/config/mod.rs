// SPDX-License-Identifier: MPL-2.0
//! Toast preferences, persisted to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.default_timeout_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::toast::Timeout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_SHOW_DISMISS_BUTTON, DEFAULT_TIMEOUT_MS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Timeout for new toasts in milliseconds; `0` or less disables auto-dismiss.
    #[serde(default)]
    pub default_timeout_ms: Option<i64>,
    #[serde(default)]
    pub show_dismiss_button: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            show_dismiss_button: Some(DEFAULT_SHOW_DISMISS_BUTTON),
        }
    }
}

impl Config {
    /// Timeout to give a toast that did not ask for one.
    #[must_use]
    pub fn default_timeout(&self) -> Timeout {
        Timeout::from_millis(self.default_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    #[must_use]
    pub fn show_dismiss_button(&self) -> bool {
        self.show_dismiss_button
            .unwrap_or(DEFAULT_SHOW_DISMISS_BUTTON)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file, falling back to defaults if it is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
