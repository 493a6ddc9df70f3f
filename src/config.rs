//! Configuration module for the calculator.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CALC_` and use double
//! underscores to separate nested levels:
//! - `CALC_DEFAULTS__INITIAL_VALUE=10` sets `defaults.initial_value`
//! - `CALC_SCIENTIFIC__NEGATIVE_SQRT=nan` sets `scientific.negative_sqrt`
//! - `CALC_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::aggregate::{PRODUCT_SEED, SUM_SEED};
use crate::scientific::SqrtPolicy;

/// Directory holding the settings file, searched from the current directory up.
pub const CONFIG_DIR: &str = ".sample-calc";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "CALC_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Configuration file already exists at {}. Use --force to overwrite", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seeds used when a command does not pass one explicitly
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Scientific calculator behaviour
    #[serde(default)]
    pub scientific: ScientificConfig,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Starting accumulator for new calculators
    #[serde(default)]
    pub initial_value: i64,

    /// Seed for `sum`
    #[serde(default = "default_sum_seed")]
    pub sum_seed: i64,

    /// Seed for `product`
    #[serde(default = "default_product_seed")]
    pub product_seed: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ScientificConfig {
    /// `"error"` or `"nan"`
    #[serde(default)]
    pub negative_sqrt: SqrtPolicy,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `calculator = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_sum_seed() -> i64 {
    SUM_SEED
}
fn default_product_seed() -> i64 {
    PRODUCT_SEED
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            defaults: DefaultsConfig::default(),
            scientific: ScientificConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            sum_seed: default_sum_seed(),
            product_seed: default_product_seed(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources.
    ///
    /// Uses the nearest `.sample-calc/settings.toml` above the current
    /// directory if there is one.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            Self::find_workspace_config().unwrap_or_else(|| Path::new(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honouring env overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Find `.sample-calc/settings.toml` from the current directory up to root.
    pub fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file under `dir`.
    pub fn init_config_file(dir: impl AsRef<Path>, force: bool) -> Result<PathBuf, ConfigError> {
        let config_path = dir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(ConfigError::AlreadyExists(config_path));
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }
}
