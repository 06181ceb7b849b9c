// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedProfile";

/// Base URL used when neither the CLI flag nor the config file sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Base URL of the account API.
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            theme_mode: ThemeMode::System,
        }
    }
}

impl Config {
    /// Resolved API base URL, falling back to the built-in default.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            api_base_url: Some("https://api.example.org".to_string()),
            theme_mode: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.api_base_url, config.api_base_url);
        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_from_path_reports_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        // The caller falls back to defaults and shows a startup warning,
        // so the parse failure must surface instead of being swallowed.
        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_points_at_local_api() {
        let config = Config::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn empty_api_base_url_falls_back_to_default() {
        let config = Config {
            api_base_url: Some(String::new()),
            ..Config::default()
        };
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }
}
