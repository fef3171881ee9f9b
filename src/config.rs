use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages::{CategoryFilter, ParseCategoryFilterError};

pub const APP_DIR_NAME: &str = "message-organizer";
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    InvalidCategory(#[from] ParseCategoryFilterError),

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub date_format: String,
    pub default_category: String,
    pub messages_file: Option<PathBuf>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            default_category: CategoryFilter::All.as_str().to_string(),
            messages_file: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/message-organizer/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        config.category_filter()?;
        config.log_level_filter()?;
        Ok(config)
    }

    pub fn category_filter(&self) -> Result<CategoryFilter, ConfigError> {
        Ok(self.default_category.parse()?)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_log_level(&self.log_level)
    }

    /// Log file location, defaulting to the user cache directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir()
                .or_else(|| dirs::home_dir().map(|h| h.join(".cache")))
                .map(|dir| dir.join(APP_DIR_NAME).join("message-organizer.log"))
        })
    }
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}
