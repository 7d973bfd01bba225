//! `interruptAttachingToTangle`
//!
//! Interrupts and completely aborts a running `attachToTangle` proof of work.

use crate::action::{command_map, expect_command, Action, ExecutableAction};
use crate::commands::Command;
use crate::errors::{RemoteApiError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Interrupt request; carries no parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterruptAttachingToTangle;

/// Successful `interruptAttachingToTangle` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InterruptAttachingToTangleResponse {
    #[serde(default)]
    pub duration: Option<u64>,
}

impl InterruptAttachingToTangle {
    pub fn new() -> Self {
        Self
    }

    /// Rebuild the action from `serialize` output
    ///
    /// # Errors
    ///
    /// `InvalidPersistedForm` if the map names another command or carries
    /// parameters.
    pub fn deserialize(persisted: &Map<String, Value>) -> Result<Self> {
        expect_command(persisted, Command::InterruptAttachingToTangle)?;
        if persisted.len() > 1 {
            return Err(RemoteApiError::InvalidPersistedForm {
                reason: "interruptAttachingToTangle takes no parameters".to_string(),
            });
        }
        Ok(Self)
    }
}

impl Action for InterruptAttachingToTangle {
    fn command(&self) -> Command {
        Command::InterruptAttachingToTangle
    }

    fn json_serialize(&self) -> Map<String, Value> {
        command_map(self.command())
    }
}

impl ExecutableAction for InterruptAttachingToTangle {
    type Response = InterruptAttachingToTangleResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_is_exactly_the_command() {
        let payload = Value::Object(InterruptAttachingToTangle.json_serialize());
        assert_eq!(payload, json!({"command": "interruptAttachingToTangle"}));
    }

    #[test]
    fn test_deserialize_rejects_extra_keys() {
        let mut persisted = command_map(Command::InterruptAttachingToTangle);
        persisted.insert("trytes".to_string(), json!([]));
        assert!(InterruptAttachingToTangle::deserialize(&persisted).is_err());
    }
}
