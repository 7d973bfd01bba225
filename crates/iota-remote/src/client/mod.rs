//! Dispatch clients
//!
//! The core only needs something that turns an action into a status code and
//! a raw body. `HttpNodeApiClient` is the production implementation; tests
//! plug in in-memory fakes.

pub mod http;

use crate::action::Action;
use crate::errors::Result;
use crate::result::{ErrorIndicators, RawResponse};

pub use http::HttpNodeApiClient;

/// Performs the network call for an action
///
/// Implementations are shared by reference across actions and threads and
/// must not require mutable access to send.
pub trait NodeApiClient: Send + Sync {
    /// Send the action's wire payload and return the raw outcome
    ///
    /// # Errors
    ///
    /// Returns `Transport` or `Timeout` when no response was obtained. A
    /// response with a failure status is not an error at this level.
    fn send(&self, action: &dyn Action) -> Result<RawResponse>;

    /// Error-indicator shape of the node this client talks to
    fn error_indicators(&self) -> ErrorIndicators {
        ErrorIndicators::default()
    }
}
