use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LiftParseError, Result};
use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Output preferences for the parse command
    pub output: OutputSettings,

    /// Logging settings
    pub logging: LogConfig,
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default display format (table, json, summary)
    pub default_format: String,

    /// Always report dropped lines after parsing
    pub show_warnings: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            default_format: "table".to_string(),
            show_warnings: false,
        }
    }
}

impl AppConfig {
    /// Default config file location under the user config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("liftparse").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<AppConfig> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(AppConfig::default()),
            },
        };

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents).map_err(|e| {
            LiftParseError::Configuration(format!("{}: {e}", path.display()))
        })
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| LiftParseError::Configuration(e.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output.default_format, "table");
        assert!(!config.output.show_warnings);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.output.default_format = "json".to_string();
        config.output.show_warnings = true;
        config.logging.level = LogLevel::Debug;

        config.save(&path).unwrap();
        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nshow_warnings = true\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert!(config.output.show_warnings);
        assert_eq!(config.output.default_format, "table");
        assert_eq!(config.logging, LogConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_a_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = 42").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, LiftParseError::Configuration(_)));
    }
}
