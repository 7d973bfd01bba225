//! Blocking HTTP dispatch over `reqwest`

use crate::action::Action;
use crate::client::NodeApiClient;
use crate::commands::Command;
use crate::config::NodeConfig;
use crate::errors::{RemoteApiError, Result};
use crate::result::{ErrorIndicators, RawResponse};
use iota_remote_types::Sensitive;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

/// Header carrying the node API version
pub const API_VERSION_HEADER: &str = "X-IOTA-API-Version";

/// Posts wire payloads to a node's command endpoint
pub struct HttpNodeApiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    auth_token: Option<Sensitive<String>>,
    indicators: ErrorIndicators,
}

impl HttpNodeApiClient {
    /// Build a client from validated configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the config is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &NodeConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_VERSION_HEADER,
            HeaderValue::from_str(&config.api_version).map_err(|e| {
                RemoteApiError::Configuration {
                    message: format!("invalid api_version header value: {}", e),
                }
            })?,
        );

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RemoteApiError::Configuration {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            auth_token: config.auth_token.clone(),
            indicators: config.error_indicators.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HttpNodeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpNodeApiClient")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &self.auth_token)
            .finish()
    }
}

impl NodeApiClient for HttpNodeApiClient {
    fn send(&self, action: &dyn Action) -> Result<RawResponse> {
        let command = action.command();
        let payload = action.json_serialize();
        tracing::debug!(
            command = command.as_str(),
            endpoint = %self.endpoint,
            "dispatching node command"
        );

        let mut request = self.http.post(&self.endpoint).json(&payload);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token.expose());
        }

        let response = request.send().map_err(|e| transport_error(command, e))?;
        let code = response.status().as_u16();
        let raw = response.text().map_err(|e| transport_error(command, e))?;

        tracing::debug!(
            command = command.as_str(),
            status_code = code,
            body_len = raw.len(),
            "node responded"
        );
        Ok(RawResponse { code, raw })
    }

    fn error_indicators(&self) -> ErrorIndicators {
        self.indicators.clone()
    }
}

fn transport_error(command: Command, err: reqwest::Error) -> RemoteApiError {
    if err.is_timeout() {
        RemoteApiError::Timeout {
            command: command.to_string(),
            message: err.to_string(),
        }
    } else {
        RemoteApiError::Transport {
            command: command.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_header_value() {
        let config = NodeConfig::default().with_api_version("1\n2");
        let err = HttpNodeApiClient::new(&config).unwrap_err();
        assert!(matches!(err, RemoteApiError::Configuration { .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = NodeConfig::default().with_auth_token("super-secret");
        let client = HttpNodeApiClient::new(&config).unwrap();
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("localhost:14265"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_error_indicators_come_from_config() {
        let indicators = ErrorIndicators {
            fields: vec!["message".to_string()],
            non_success_status_is_error: false,
        };
        let config = NodeConfig::default().with_error_indicators(indicators.clone());
        let client = HttpNodeApiClient::new(&config).unwrap();
        assert_eq!(client.error_indicators(), indicators);
    }
}
