//! Persisted application preferences.
//!
//! The only persisted setting is the theme. It lives in a small TOML file
//! under the platform config directory; a missing file falls back to the
//! system theme.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ui::theme::Theme;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// UI theme preference
    pub theme: Theme,
}

impl AppConfig {
    /// Configuration seeded from the system theme, used when no file exists.
    pub fn from_system() -> Self {
        Self {
            theme: Theme::system_default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitdash", "FitDash")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from an explicit path.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::from_system());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to an explicit path.
pub fn save_config_to(config: &AppConfig, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        let config = AppConfig { theme: Theme::Dark };
        save_config_to(&config, &path).expect("save config");

        let loaded = load_config_from(&path).expect("load config");
        assert_eq!(loaded.theme, Theme::Dark);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nope.toml");

        // Must not error; theme comes from the system fallback.
        let loaded = load_config_from(&path).expect("load config");
        let _ = loaded.theme;
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = 42").expect("write file");

        match load_config_from(&path) {
            Err(ConfigError::ParseError(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
