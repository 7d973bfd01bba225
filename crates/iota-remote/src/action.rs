//! The action contract shared by every node command
//!
//! An action is a pure description of one node call. It renders the wire
//! payload and a persisted form. Execution borrows a dispatch client for the
//! duration of the call and hands back a freshly built `ActionResult`.

use crate::client::NodeApiClient;
use crate::commands::Command;
use crate::errors::{RemoteApiError, Result};
use crate::result::{persisted_command, ActionResult};
use crate::{log_op_end, log_op_error, log_op_start};
use iota_remote_types::RequestId;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::time::Instant;

/// Key holding the command literal in both wire and persisted forms
pub const COMMAND_KEY: &str = "command";

/// Capabilities common to every node command
pub trait Action: Send + Sync {
    /// Which node command this action requests
    fn command(&self) -> Command;

    /// Exact JSON body sent to the node; always contains `"command"`
    fn json_serialize(&self) -> Map<String, Value>;

    /// Persisted form for storage and replay
    ///
    /// The default covers commands without fields.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if a field cannot be represented.
    fn serialize(&self) -> Result<Map<String, Value>> {
        Ok(command_map(self.command()))
    }

    /// SHA-256 of the canonical wire payload, hex encoded
    ///
    /// Two actions share a key exactly when the node would receive the same
    /// body from them.
    fn cache_key(&self) -> String {
        // Map keys are sorted, so the encoding is canonical.
        let body = Value::Object(self.json_serialize()).to_string();
        hex::encode(Sha256::digest(body.as_bytes()))
    }
}

/// An action with a typed success payload
pub trait ExecutableAction: Action + Sized {
    /// Shape of a successful node response body
    type Response: DeserializeOwned;

    /// Dispatch the action once and interpret the response
    ///
    /// # Errors
    ///
    /// Transport errors from `client` propagate unchanged; protocol errors
    /// are raised from the finished result.
    fn execute(&self, client: &dyn NodeApiClient) -> Result<ActionResult<Self::Response>> {
        execute_action(self, client)
    }
}

/// Send `action` through `client`, then initialize, finish and check a new result
///
/// # Errors
///
/// See [`ExecutableAction::execute`].
pub fn execute_action<A, R>(action: &A, client: &dyn NodeApiClient) -> Result<ActionResult<R>>
where
    A: Action,
    R: DeserializeOwned,
{
    let command = action.command();
    let request_id = RequestId::new();
    let start = Instant::now();
    log_op_start!(
        "execute",
        command = command.as_str(),
        request_id = request_id.as_str()
    );

    let result = ActionResult::new(command, request_id.clone(), client.error_indicators());
    let outcome = client
        .send(action)
        .and_then(|response| result.initialize(response.code, response.raw))
        .map(ActionResult::finish)
        .and_then(ActionResult::throw_on_error);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &outcome {
        Ok(result) => {
            log_op_end!(
                "execute",
                duration_ms = duration_ms,
                command = command.as_str(),
                request_id = request_id.as_str(),
                status_code = result.status_code().unwrap_or_default()
            );
        }
        Err(err) => {
            log_op_error!(
                "execute",
                err,
                duration_ms = duration_ms,
                command = command.as_str(),
                request_id = request_id.as_str()
            );
        }
    }
    outcome
}

/// `{"command": <literal>}`
pub fn command_map(command: Command) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(COMMAND_KEY.to_string(), Value::from(command.as_str()));
    map
}

/// Check that a persisted map was produced by `expected`
///
/// # Errors
///
/// `InvalidPersistedForm` if the map names another command or none.
pub fn expect_command(persisted: &Map<String, Value>, expected: Command) -> Result<()> {
    let found = persisted_command(persisted)?;
    if found != expected {
        return Err(RemoteApiError::InvalidPersistedForm {
            reason: format!("expected command {}, found {}", expected, found),
        });
    }
    Ok(())
}
