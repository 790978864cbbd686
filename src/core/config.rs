//! Application configuration management
//!
//! This module handles loading and validating configuration from TOML files.
//! All configuration is validated at startup.

use crate::core::constants::{DEFAULT_LOG_LEVEL, PAGE_INFO_PATH};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// Seconds; no timeout when absent
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_path() -> String {
    PAGE_INFO_PATH.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application configuration loaded from a TOML file
#[derive(Debug, Clone)]
pub struct Config {
    /// Site origin the function path is resolved against
    pub base_url: String,

    /// Path of the page info function
    pub path: String,

    /// Optional request timeout in seconds
    pub request_timeout: Option<u64>,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Load configuration from TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The TOML file cannot be read or parsed
    /// - The endpoint section is missing
    /// - The base URL or path is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        let base_url = config.endpoint.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("Invalid endpoint.base_url '{base_url}': must start with http:// or https://");
        }

        if !config.endpoint.path.starts_with('/') {
            bail!(
                "Invalid endpoint.path '{}': must start with '/'",
                config.endpoint.path
            );
        }

        Ok(Config {
            base_url,
            path: config.endpoint.path,
            request_timeout: config.endpoint.request_timeout,
            log_level: config.logging.level,
        })
    }

    /// Load configuration from the file named by `CONFIG_PATH`
    ///
    /// Looks for config.toml in current directory by default
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::from_file(&config_path)
            .with_context(|| format!("Could not load configuration from {config_path}"))
    }

    /// Full URL of the page info function
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }
}
