//! # Client configuration (`config.toml`)
//!
//! One configuration value set is built at startup and handed to both views, so
//! the backend address is never embedded in a component.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000/"   # root the endpoint paths are joined onto
//!
//! [intake]
//! reset_delay_ms = 3000                  # how long the success banner stays up
//!
//! [logging]
//! level = "info"                         # trace | debug | info | warn | error
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`IntakeConfig`] | Delay before the intake form clears itself after a successful create. |
//! | [`LoggingConfig`] | Log level handed to the logger at startup. |
//!
//! Every section has a default, so an empty file is a valid configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("api.base_url must not be empty")]
    MissingBaseUrl,

    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default = "default_reset_delay")]
    pub reset_delay_ms: u64,
}

fn default_reset_delay() -> u64 {
    3000
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to change the post-create reset delay.
    pub fn with_reset_delay(mut self, millis: u64) -> Self {
        self.intake.reset_delay_ms = millis;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse and check a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    /// Any other read failure, or a malformed file, is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        self.log_level()?;
        Ok(())
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.intake.reset_delay_ms)
    }

    /// The configured level, normalised to lower case.
    pub fn log_level(&self) -> Result<&'static str, ConfigError> {
        match self.logging.level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok("trace"),
            "debug" => Ok("debug"),
            "info" => Ok("info"),
            "warn" | "warning" => Ok("warn"),
            "error" => Ok("error"),
            other => Err(ConfigError::UnknownLevel(other.to_string())),
        }
    }
}
