//! Concrete node commands
//!
//! Each command is its own type implementing `Action`. `NodeAction` wraps
//! them for code that handles commands generically, such as replaying
//! persisted actions, and dispatches on the variant.

pub mod broadcast_transactions;
pub mod interrupt_attaching_to_tangle;

pub use broadcast_transactions::{BroadcastTransactions, BroadcastTransactionsResponse};
pub use interrupt_attaching_to_tangle::{
    InterruptAttachingToTangle, InterruptAttachingToTangleResponse,
};

use crate::action::{Action, ExecutableAction};
use crate::client::NodeApiClient;
use crate::commands::Command;
use crate::errors::{RemoteApiError, Result};
use crate::result::{persisted_command, ActionResult, ErrorIndicators};
use serde_json::{Map, Value};

/// Any supported action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAction {
    BroadcastTransactions(BroadcastTransactions),
    InterruptAttachingToTangle(InterruptAttachingToTangle),
}

impl NodeAction {
    /// Rebuild the action described by a persisted map
    ///
    /// # Errors
    ///
    /// `UnknownCommand` or `InvalidPersistedForm`.
    pub fn deserialize(persisted: &Map<String, Value>) -> Result<Self> {
        match persisted_command(persisted)? {
            Command::BroadcastTransactions => {
                BroadcastTransactions::deserialize(persisted).map(Self::BroadcastTransactions)
            }
            Command::InterruptAttachingToTangle => {
                InterruptAttachingToTangle::deserialize(persisted)
                    .map(Self::InterruptAttachingToTangle)
            }
        }
    }

    /// Parse a persisted action from JSON text
    ///
    /// # Errors
    ///
    /// `InvalidPersistedForm` if the text is not a JSON object, otherwise as
    /// [`NodeAction::deserialize`].
    pub fn from_json(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Self::deserialize(&map),
            Ok(_) => Err(RemoteApiError::InvalidPersistedForm {
                reason: "persisted action must be a JSON object".to_string(),
            }),
            Err(e) => Err(RemoteApiError::InvalidPersistedForm {
                reason: e.to_string(),
            }),
        }
    }

    /// Execute whichever command this is
    ///
    /// # Errors
    ///
    /// As [`ExecutableAction::execute`].
    pub fn execute(&self, client: &dyn NodeApiClient) -> Result<NodeActionResult> {
        match self {
            NodeAction::BroadcastTransactions(a) => a
                .execute(client)
                .map(NodeActionResult::BroadcastTransactions),
            NodeAction::InterruptAttachingToTangle(a) => a
                .execute(client)
                .map(NodeActionResult::InterruptAttachingToTangle),
        }
    }

    fn inner(&self) -> &dyn Action {
        match self {
            NodeAction::BroadcastTransactions(a) => a,
            NodeAction::InterruptAttachingToTangle(a) => a,
        }
    }
}

impl Action for NodeAction {
    fn command(&self) -> Command {
        self.inner().command()
    }

    fn json_serialize(&self) -> Map<String, Value> {
        self.inner().json_serialize()
    }

    fn serialize(&self) -> Result<Map<String, Value>> {
        self.inner().serialize()
    }
}

impl From<BroadcastTransactions> for NodeAction {
    fn from(action: BroadcastTransactions) -> Self {
        NodeAction::BroadcastTransactions(action)
    }
}

impl From<InterruptAttachingToTangle> for NodeAction {
    fn from(action: InterruptAttachingToTangle) -> Self {
        NodeAction::InterruptAttachingToTangle(action)
    }
}

/// Result of any supported action
#[derive(Debug, Clone)]
pub enum NodeActionResult {
    BroadcastTransactions(ActionResult<BroadcastTransactionsResponse>),
    InterruptAttachingToTangle(ActionResult<InterruptAttachingToTangleResponse>),
}

impl NodeActionResult {
    pub fn command(&self) -> Command {
        match self {
            NodeActionResult::BroadcastTransactions(r) => r.command(),
            NodeActionResult::InterruptAttachingToTangle(r) => r.command(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            NodeActionResult::BroadcastTransactions(r) => r.status_code(),
            NodeActionResult::InterruptAttachingToTangle(r) => r.status_code(),
        }
    }

    /// Node-reported duration, when the result is successful and carries one
    pub fn duration(&self) -> Option<u64> {
        match self {
            NodeActionResult::BroadcastTransactions(r) => r.payload()?.duration,
            NodeActionResult::InterruptAttachingToTangle(r) => r.payload()?.duration,
        }
    }

    pub fn serialize(&self) -> Map<String, Value> {
        match self {
            NodeActionResult::BroadcastTransactions(r) => r.serialize(),
            NodeActionResult::InterruptAttachingToTangle(r) => r.serialize(),
        }
    }

    /// Rebuild a persisted result, choosing the payload type from its command
    ///
    /// # Errors
    ///
    /// As [`ActionResult::restore`].
    pub fn restore(persisted: &Map<String, Value>, indicators: ErrorIndicators) -> Result<Self> {
        match persisted_command(persisted)? {
            Command::BroadcastTransactions => ActionResult::restore(persisted, indicators)
                .map(NodeActionResult::BroadcastTransactions),
            Command::InterruptAttachingToTangle => ActionResult::restore(persisted, indicators)
                .map(NodeActionResult::InterruptAttachingToTangle),
        }
    }
}
