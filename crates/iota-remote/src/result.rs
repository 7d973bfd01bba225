//! Interpretation of one node response
//!
//! An `ActionResult` moves through `Created → Initialized → Finished`, where
//! the finished state is either success or error:
//!
//! ```
//! use iota_remote::result::{ActionResult, ErrorIndicators, ResultState};
//! use iota_remote::Command;
//! use iota_remote_types::RequestId;
//!
//! let result: ActionResult<serde_json::Value> = ActionResult::new(
//!     Command::InterruptAttachingToTangle,
//!     RequestId::new(),
//!     ErrorIndicators::default(),
//! );
//! let result = result
//!     .initialize(200, r#"{"duration":0}"#.to_string())
//!     .unwrap()
//!     .finish()
//!     .throw_on_error()
//!     .unwrap();
//! assert_eq!(result.state(), ResultState::Success);
//! ```

use crate::commands::Command;
use crate::errors::{RemoteApiError, Result};
use iota_remote_types::RequestId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const KEY_COMMAND: &str = "command";
const KEY_REQUEST_ID: &str = "requestId";
const KEY_STATUS_CODE: &str = "statusCode";
const KEY_RAW: &str = "raw";

/// How a node signals failure inside a response
///
/// Node API versions differ in which body field carries the failure, so the
/// shape is configuration rather than a constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorIndicators {
    /// Body fields that mark an error when present and non-empty, checked in order
    pub fields: Vec<String>,
    /// Treat any status outside 200-299 as an error even if no field is set
    pub non_success_status_is_error: bool,
}

impl Default for ErrorIndicators {
    fn default() -> Self {
        Self {
            fields: vec!["error".to_string(), "exception".to_string()],
            non_success_status_is_error: true,
        }
    }
}

impl ErrorIndicators {
    /// Message carried by the first non-empty indicator field, if any
    pub fn error_message(&self, body: &Value) -> Option<String> {
        self.fields
            .iter()
            .filter_map(|field| body.get(field))
            .find_map(indicator_text)
    }

    fn status_is_error(&self, code: u16) -> bool {
        self.non_success_status_is_error && !(200..300).contains(&code)
    }
}

fn indicator_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// Raw transport outcome recorded by `initialize`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub code: u16,
    pub raw: String,
}

/// Observable lifecycle state of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultState {
    Created,
    Initialized,
    Success,
    Error,
}

#[derive(Debug, Clone)]
enum Outcome<R> {
    Success { body: Value, payload: R },
    Error(RemoteApiError),
}

/// Typed outcome of executing one action
///
/// Refers back to its action through the command name and the request id of
/// the dispatch, never through a reference to the action itself.
#[derive(Debug, Clone)]
pub struct ActionResult<R> {
    command: Command,
    request_id: RequestId,
    indicators: ErrorIndicators,
    response: Option<RawResponse>,
    outcome: Option<Outcome<R>>,
}

impl<R: DeserializeOwned> ActionResult<R> {
    pub fn new(command: Command, request_id: RequestId, indicators: ErrorIndicators) -> Self {
        Self {
            command,
            request_id,
            indicators,
            response: None,
            outcome: None,
        }
    }

    /// Record the status code and body returned by the dispatch client
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if a response was already recorded. The
    /// result is consumed either way; a second response is never recorded.
    pub fn initialize(mut self, code: u16, raw: String) -> Result<Self> {
        if self.response.is_some() {
            return Err(RemoteApiError::AlreadyInitialized {
                command: self.command.to_string(),
            });
        }
        self.response = Some(RawResponse { code, raw });
        Ok(self)
    }

    /// Parse the recorded response and classify it as success or error
    ///
    /// Calling `finish` again once finished changes nothing. Calling it
    /// before `initialize` leaves the result in `Created`.
    pub fn finish(mut self) -> Self {
        if self.outcome.is_some() {
            return self;
        }
        if let Some(response) = &self.response {
            self.outcome = Some(classify(self.command, &self.indicators, response));
        }
        self
    }

    /// Convert an error outcome into an `Err`, pass success through unchanged
    ///
    /// # Errors
    ///
    /// - the protocol error found by `finish` (`NodeError` or `MalformedResponse`)
    /// - `NotFinished` if `finish` has not produced an outcome yet
    pub fn throw_on_error(self) -> Result<Self> {
        match &self.outcome {
            Some(Outcome::Success { .. }) => Ok(self),
            Some(Outcome::Error(err)) => Err(err.clone()),
            None => Err(RemoteApiError::NotFinished {
                command: self.command.to_string(),
            }),
        }
    }

    /// Persisted representation: command, request id, status code and raw body
    pub fn serialize(&self) -> Map<String, Value> {
        let mut persisted = Map::new();
        persisted.insert(KEY_COMMAND.to_string(), Value::from(self.command.as_str()));
        persisted.insert(
            KEY_REQUEST_ID.to_string(),
            Value::from(self.request_id.as_str()),
        );
        persisted.insert(
            KEY_STATUS_CODE.to_string(),
            self.response
                .as_ref()
                .map_or(Value::Null, |r| Value::from(r.code)),
        );
        persisted.insert(
            KEY_RAW.to_string(),
            self.response
                .as_ref()
                .map_or(Value::Null, |r| Value::from(r.raw.as_str())),
        );
        persisted
    }

    /// Rebuild a result from `serialize` output
    ///
    /// A recorded response is initialized and finished again, so the restored
    /// outcome is recomputed from the same bytes rather than trusted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPersistedForm` or `UnknownCommand` if the map does not
    /// describe a result.
    pub fn restore(persisted: &Map<String, Value>, indicators: ErrorIndicators) -> Result<Self> {
        let command = persisted_command(persisted)?;
        let request_id = match persisted.get(KEY_REQUEST_ID) {
            Some(Value::String(id)) => RequestId::from_string(id.clone()),
            _ => return Err(invalid_form("missing or non-string requestId")),
        };

        let result = Self::new(command, request_id, indicators);
        let code = match persisted.get(KEY_STATUS_CODE) {
            None | Some(Value::Null) => return Ok(result),
            Some(value) => value
                .as_u64()
                .and_then(|c| u16::try_from(c).ok())
                .ok_or_else(|| invalid_form("statusCode is not a valid status"))?,
        };
        let raw = match persisted.get(KEY_RAW) {
            Some(Value::String(raw)) => raw.clone(),
            _ => return Err(invalid_form("statusCode present without a string raw body")),
        };

        Ok(result.initialize(code, raw)?.finish())
    }
}

impl<R> ActionResult<R> {
    pub fn command(&self) -> Command {
        self.command
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn state(&self) -> ResultState {
        match (&self.response, &self.outcome) {
            (_, Some(Outcome::Success { .. })) => ResultState::Success,
            (_, Some(Outcome::Error(_))) => ResultState::Error,
            (Some(_), None) => ResultState::Initialized,
            (None, None) => ResultState::Created,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state() == ResultState::Success
    }

    pub fn is_error(&self) -> bool {
        self.state() == ResultState::Error
    }

    /// Status code, once initialized
    pub fn status_code(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.code)
    }

    /// Raw response body, once initialized
    pub fn raw(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.raw.as_str())
    }

    /// Parsed body, only in the success state
    pub fn body(&self) -> Option<&Value> {
        match &self.outcome {
            Some(Outcome::Success { body, .. }) => Some(body),
            _ => None,
        }
    }

    /// Typed payload, only in the success state
    pub fn payload(&self) -> Option<&R> {
        match &self.outcome {
            Some(Outcome::Success { payload, .. }) => Some(payload),
            _ => None,
        }
    }

    /// Protocol error, only in the error state
    pub fn error(&self) -> Option<&RemoteApiError> {
        match &self.outcome {
            Some(Outcome::Error(err)) => Some(err),
            _ => None,
        }
    }

    /// Human-readable failure message, only in the error state
    pub fn error_message(&self) -> Option<&str> {
        match self.error()? {
            RemoteApiError::NodeError { message, .. } => Some(message.as_str()),
            RemoteApiError::MalformedResponse { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }
}

fn classify<R: DeserializeOwned>(
    command: Command,
    indicators: &ErrorIndicators,
    response: &RawResponse,
) -> Outcome<R> {
    let code = response.code;
    let node_error = |message: String| {
        Outcome::Error(RemoteApiError::NodeError {
            command: command.to_string(),
            status_code: code,
            message,
        })
    };
    let malformed = |reason: String| {
        Outcome::Error(RemoteApiError::MalformedResponse {
            command: command.to_string(),
            status_code: code,
            reason,
        })
    };

    let body: Value = match serde_json::from_str(&response.raw) {
        Ok(body) => body,
        Err(_) if indicators.status_is_error(code) => {
            return node_error(plain_text_message(code, &response.raw))
        }
        Err(e) => return malformed(format!("body is not JSON: {}", e)),
    };

    if let Some(message) = indicators.error_message(&body) {
        return node_error(message);
    }
    if indicators.status_is_error(code) {
        return node_error(format!("node responded with status {}: {}", code, body));
    }

    match R::deserialize(&body) {
        Ok(payload) => Outcome::Success { body, payload },
        Err(e) => malformed(format!("unexpected body shape: {}", e)),
    }
}

// Proxies in front of a node often answer errors with plain text or nothing.
fn plain_text_message(code: u16, raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        format!("node responded with status {} and an empty body", code)
    } else {
        text.to_string()
    }
}

pub(crate) fn persisted_command(persisted: &Map<String, Value>) -> Result<Command> {
    match persisted.get(KEY_COMMAND) {
        Some(Value::String(name)) => name.parse(),
        _ => Err(invalid_form("missing or non-string command")),
    }
}

fn invalid_form(reason: &str) -> RemoteApiError {
    RemoteApiError::InvalidPersistedForm {
        reason: reason.to_string(),
    }
}
