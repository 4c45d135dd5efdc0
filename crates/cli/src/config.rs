// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from the first of:
//! - the `--config` flag (must exist)
//! - `$SIEVE_CONFIG` (must exist)
//! - `<config dir>/sieve/config.toml` (optional)
//!
//! and supplies defaults that command-line flags override:
//!
//! ```toml
//! limit = 25
//! sort_order = "desc"
//! pretty = true
//!
//! [customers]
//! sort_by = "created_at"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sieve_core::{CustomersSortBy, SortOrder};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "sieve";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Defaults applied to every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size used when `--limit` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Ordering used when `--sort-order` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Indent JSON output.
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub customers: CustomersConfig,
}

/// Defaults for `list_customers` requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<CustomersSortBy>,
}

/// Where a config file was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config` or `$SIEVE_CONFIG`; missing is an error.
    Required(PathBuf),
    /// The per-user default location; missing means defaults.
    Optional(PathBuf),
    /// No location could be determined.
    None,
}

impl ConfigSource {
    /// Picks the config location from the flag, the environment, and the
    /// default location, in that order.
    pub fn pick(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
        default: Option<PathBuf>,
    ) -> Self {
        match (explicit.or(from_env), default) {
            (Some(path), _) => ConfigSource::Required(path),
            (None, Some(path)) => ConfigSource::Optional(path),
            (None, None) => ConfigSource::None,
        }
    }
}

/// Returns `<config dir>/sieve/config.toml` for the current user.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads configuration from `source`.
    pub fn from_source(source: &ConfigSource) -> Result<Self> {
        match source {
            ConfigSource::Required(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigNotFound(path.display().to_string()));
                }
                Config::load(path)
            }
            ConfigSource::Optional(path) if path.is_file() => Config::load(path),
            ConfigSource::Optional(path) => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            ConfigSource::None => Ok(Config::default()),
        }
    }

    /// Resolves and loads configuration for this process.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let source = ConfigSource::pick(explicit, env::config_path(), default_config_path());
        Config::from_source(&source)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
