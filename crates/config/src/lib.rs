//! Configuration loading, validation, and management for Mailweave.
//!
//! Loads configuration from `~/.mailweave/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Number of templates mixed into one email unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 3;

/// The root configuration structure.
///
/// Maps directly to `~/.mailweave/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the template corpus is loaded from
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Ranking settings
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Default placeholder values
    #[serde(default)]
    pub variables: VariablesConfig,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// A file path, an http(s) URL, or `builtin`
    #[serde(default = "default_corpus_source")]
    pub source: String,

    /// Upper bound on a single corpus fetch
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_corpus_source() -> String {
    "builtin".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            source: default_corpus_source(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

/// Values used for placeholders the caller does not supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariablesConfig {
    /// Recipient name used when the request names nobody
    #[serde(default = "default_recipient")]
    pub default_recipient: String,

    /// Who signs the email (`{your_name}`)
    #[serde(default = "default_sender")]
    pub sender: String,

    /// chrono format string for `{date}`
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// chrono format string for `{time}`
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Extra or replacement placeholder values
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, String>,
}

fn default_recipient() -> String {
    "Friend".into()
}
fn default_sender() -> String {
    "Assistant".into()
}
fn default_date_format() -> String {
    "%B %-d".into()
}
fn default_time_format() -> String {
    "%I:%M %p".into()
}

impl Default for VariablesConfig {
    fn default() -> Self {
        Self {
            default_recipient: default_recipient(),
            sender: default_sender(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            overrides: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub allow_public_bind: bool,
}

fn default_port() -> u16 {
    42618
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allow_public_bind: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.mailweave/config.toml).
    ///
    /// Environment variables take priority over the file:
    /// - `MAILWEAVE_CORPUS`: corpus locator
    /// - `MAILWEAVE_TOP_K`: number of templates to combine
    /// - `MAILWEAVE_SENDER`: value of `{your_name}`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production).
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup("MAILWEAVE_CORPUS") {
            self.corpus.source = source;
        }

        if let Some(top_k) = lookup("MAILWEAVE_TOP_K") {
            self.selection.top_k = top_k.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "MAILWEAVE_TOP_K must be a positive integer, got '{top_k}'"
                ))
            })?;
        }

        if let Some(sender) = lookup("MAILWEAVE_SENDER") {
            self.variables.sender = sender;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".mailweave")
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Where `mailweave init` writes an editable copy of the built-in corpus.
    pub fn default_corpus_path() -> PathBuf {
        Self::config_dir().join("corpus.txt")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.corpus.source.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "corpus.source must not be empty".into(),
            ));
        }

        if self.corpus.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "corpus.timeout_secs must be > 0".into(),
            ));
        }

        if self.selection.top_k == 0 {
            return Err(ConfigError::ValidationError(
                "selection.top_k must be > 0".into(),
            ));
        }

        if self.gateway.host == "0.0.0.0" && !self.gateway.allow_public_bind {
            return Err(ConfigError::ValidationError(
                "gateway.host is 0.0.0.0 but allow_public_bind is false".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
