//! iota-remote - typed command layer for IOTA node APIs
//!
//! Every supported node command is an [`Action`]: it renders the exact JSON
//! body the node expects, a persisted form for storage and replay, and can be
//! executed through any [`NodeApiClient`]. Execution yields an
//! [`ActionResult`] that has parsed the node's answer and classified it as
//! success or failure.
//!
//! ```
//! use iota_remote::{Action, BroadcastTransactions, InterruptAttachingToTangle};
//!
//! let payload = InterruptAttachingToTangle.json_serialize();
//! assert_eq!(payload["command"], "interruptAttachingToTangle");
//!
//! let payload = BroadcastTransactions::new().json_serialize();
//! assert_eq!(payload["trytes"], serde_json::json!([]));
//! ```
//!
//! Failures fall into three classes (see [`ErrorClass`]): validation errors
//! raised before anything is sent, transport errors from the dispatch client,
//! and protocol errors reported by the node.

pub mod action;
pub mod actions;
pub mod client;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod result;
pub mod serialize_util;
pub mod types;

// Used by the logging macros through `$crate`.
pub use iota_remote_types;

// Re-export commonly used types
pub use action::{Action, ExecutableAction};
pub use actions::{
    BroadcastTransactions, InterruptAttachingToTangle, NodeAction, NodeActionResult,
};
pub use client::{HttpNodeApiClient, NodeApiClient};
pub use commands::Command;
pub use config::NodeConfig;
pub use errors::{ErrorClass, ExError, ExErrorKind, RemoteApiError, Result};
pub use result::{ActionResult, ErrorIndicators, RawResponse, ResultState};
pub use types::{Transaction, Trytes};
