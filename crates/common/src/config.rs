//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MonregError, MonregResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Monitor registry behaviour.
    pub registry: RegistryConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Controls how the registry correlates display monitors with adapter outputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Enumerate graphics-adapter outputs and copy their identifiers onto
    /// geometry-matching monitors. When false, every record stays unresolved.
    pub match_adapter_outputs: bool,

    /// Ignore adapter outputs that are not attached to the desktop.
    pub attached_outputs_only: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "monreg=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            match_adapter_outputs: true,
            attached_outputs_only: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> MonregResult<Self> {
        if !path.exists() {
            return Err(MonregError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| MonregError::config(format!("invalid config {}: {e}", path.display())))
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("APPDATA")
        .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("monreg").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_adapter_outputs() {
        let config = AppConfig::default();
        assert!(config.registry.match_adapter_outputs);
        assert!(!config.registry.attached_outputs_only);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "registry": { "attached_outputs_only": true } }"#).unwrap();
        assert!(config.registry.match_adapter_outputs);
        assert!(config.registry.attached_outputs_only);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn save_and_load_from_explicit_path() {
        let dir = std::env::temp_dir().join(format!("monreg-config-test-{}", std::process::id()));
        let path = dir.join("config.json");

        let mut config = AppConfig::default();
        config.registry.match_adapter_outputs = false;
        config.logging.level = "debug".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_from_missing_path_is_file_not_found() {
        let path = std::env::temp_dir().join("monreg-definitely-missing.json");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, MonregError::FileNotFound { .. }));
    }
}
