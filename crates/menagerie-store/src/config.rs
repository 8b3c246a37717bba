//! # Store Configuration
//!
//! Configuration for building a [`Store`](crate::Store).
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MENAGERIE_SEED=false                                               │
//! │     MENAGERIE_DEFAULT_VOLUME=25                                        │
//! │     MENAGERIE_LOG=debug                                                │
//! │                                                                         │
//! │  2. TOML Config File (path given by the caller)                        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     seed on, 10 units per new product, "info,menagerie=debug"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # menagerie.toml
//! [seed]
//! enabled = true
//!
//! [products]
//! default_volume = 10
//!
//! [log]
//! filter = "info,menagerie=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use menagerie_core::DEFAULT_PRODUCT_VOLUME;

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Seed data settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSettings {
    /// Load the fixed seed data set on startup.
    /// Default: true
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SeedSettings {
    fn default() -> Self {
        SeedSettings { enabled: true }
    }
}

/// Product settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSettings {
    /// Units in stock for every newly added product. Must not be negative.
    /// Default: 10
    #[serde(default = "default_volume")]
    pub default_volume: i64,
}

fn default_volume() -> i64 {
    DEFAULT_PRODUCT_VOLUME
}

impl Default for ProductSettings {
    fn default() -> Self {
        ProductSettings {
            default_volume: default_volume(),
        }
    }
}

/// Logging settings, read by the binary when it installs the subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive string. `RUST_LOG` still wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,menagerie=debug".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub seed: SeedSettings,

    #[serde(default)]
    pub products: ProductSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if `path` is given and exists
    /// 3. Environment variables
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&contents)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.products.default_volume < 0 {
            return Err(ConfigError::Invalid(format!(
                "products.default_volume must not be negative, got {}",
                self.products.default_volume
            )));
        }

        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`. Unparseable values are ignored with a warning.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("MENAGERIE_SEED") {
            match seed.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed.enabled = true,
                "0" | "false" | "no" | "off" => self.seed.enabled = false,
                _ => warn!(value = %seed, "Unknown MENAGERIE_SEED value in environment"),
            }
        }

        if let Some(volume) = lookup("MENAGERIE_DEFAULT_VOLUME") {
            match volume.trim().parse::<i64>() {
                Ok(v) => {
                    debug!(default_volume = v, "Overriding default volume from environment");
                    self.products.default_volume = v;
                }
                Err(_) => warn!(value = %volume, "Invalid MENAGERIE_DEFAULT_VOLUME in environment"),
            }
        }

        if let Some(filter) = lookup("MENAGERIE_LOG") {
            self.log.filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(config.seed.enabled);
        assert_eq!(config.products.default_volume, 10);
        assert_eq!(config.log.filter, "info,menagerie=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml("[products]\ndefault_volume = 3\n").unwrap();
        assert_eq!(config.products.default_volume, 3);
        assert!(config.seed.enabled);

        let config = StoreConfig::from_toml("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = StoreConfig::from_toml("[seed]\nenabled = \"maybe\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_validation() {
        let mut config = StoreConfig::default();
        config.products.default_volume = -1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.products.default_volume = 0;
        assert!(config.validate().is_ok());

        config.log.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("MENAGERIE_SEED", "off"),
            ("MENAGERIE_DEFAULT_VOLUME", "42"),
            ("MENAGERIE_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert!(!config.seed.enabled);
        assert_eq!(config.products.default_volume, 42);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut config = StoreConfig::default();
        config.apply_overrides(|key| match key {
            "MENAGERIE_SEED" => Some("perhaps".to_string()),
            "MENAGERIE_DEFAULT_VOLUME" => Some("ten".to_string()),
            _ => None,
        });
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("menagerie-{}.toml", std::process::id()));
        std::fs::write(&path, "[products]\ndefault_volume = 7\n").unwrap();

        let config = StoreConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.products.default_volume, 7);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("menagerie-does-not-exist.toml");
        assert!(StoreConfig::load(Some(&path)).is_ok());
    }
}
