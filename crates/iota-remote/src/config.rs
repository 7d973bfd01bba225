//! Node connection configuration
//!
//! Loaded from a TOML file, overridden from `IOTA_NODE_*` environment
//! variables, or built in code with the `with_*` setters.

use crate::errors::{RemoteApiError, Result};
use crate::result::ErrorIndicators;
use iota_remote_types::Sensitive;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_NODE_URL: &str = "IOTA_NODE_URL";
pub const ENV_API_VERSION: &str = "IOTA_NODE_API_VERSION";
pub const ENV_TIMEOUT_SECS: &str = "IOTA_NODE_TIMEOUT_SECS";
pub const ENV_AUTH_TOKEN: &str = "IOTA_NODE_AUTH_TOKEN";

/// Connection settings for one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Command endpoint URL
    pub endpoint: String,
    /// Sent as the `X-IOTA-API-Version` header
    pub api_version: String,
    /// Whole-request timeout enforced by the HTTP client
    pub timeout_secs: u64,
    /// Optional bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<Sensitive<String>>,
    /// How this node reports failures
    pub error_indicators: ErrorIndicators,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:14265".to_string(),
            api_version: "1".to_string(),
            timeout_secs: 30,
            auth_token: None,
            error_indicators: ErrorIndicators::default(),
        }
    }
}

impl NodeConfig {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_api_version<S: Into<String>>(mut self, api_version: S) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_auth_token<S: Into<String>>(mut self, token: S) -> Self {
        self.auth_token = Some(Sensitive::new(token.into()));
        self
    }

    pub fn with_error_indicators(mut self, indicators: ErrorIndicators) -> Self {
        self.error_indicators = indicators;
        self
    }

    /// Check the settings the HTTP client depends on
    ///
    /// # Errors
    ///
    /// `Configuration` if the endpoint is not an http(s) URL or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(RemoteApiError::Configuration {
                message: format!("endpoint must be an http(s) URL, got {:?}", self.endpoint),
            });
        }
        if self.timeout_secs == 0 {
            return Err(RemoteApiError::Configuration {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Configuration` if it does not parse.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| RemoteApiError::Configuration {
            message: format!("failed to parse config: {}", e),
        })
    }

    /// Save configuration as TOML
    ///
    /// # Errors
    ///
    /// `Configuration` if encoding fails, `Io` if the file cannot be written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| RemoteApiError::Configuration {
                message: format!("failed to serialize config: {}", e),
            })?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Defaults overridden by the process environment
    ///
    /// # Errors
    ///
    /// `Configuration` if `IOTA_NODE_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `IOTA_NODE_*` overrides read through `lookup`
    ///
    /// # Errors
    ///
    /// `Configuration` if the timeout override is not a number.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_NODE_URL) {
            self.endpoint = url;
        }
        if let Some(version) = lookup(ENV_API_VERSION) {
            self.api_version = version;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout.parse().map_err(|_| RemoteApiError::Configuration {
                message: format!("{} must be a number, got {:?}", ENV_TIMEOUT_SECS, timeout),
            })?;
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN) {
            self.auth_token = Some(Sensitive::new(token));
        }
        Ok(self)
    }

    /// File (if given) then environment, then validation
    ///
    /// # Errors
    ///
    /// Any error from loading, overriding or validating.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }
}
