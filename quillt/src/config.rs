//! Configuration module for the quillt CLI.
//!
//! Settings are read from a `quillt.toml` file. Command-line flags take
//! precedence over anything loaded here.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{QuilltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "quillt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Error check settings.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Settings for `quillt tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format: `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether text output includes byte spans.
    #[serde(default)]
    pub show_spans: bool,
}

/// Settings for `quillt check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Maximum number of errors reported per file.
    #[serde(default)]
    pub max_errors: Option<usize>,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_spans: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then `~/.config/quillt/`, then the
    /// system configuration directory. Returns the default configuration if
    /// no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuilltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            QuilltError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("quillt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("quillt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
