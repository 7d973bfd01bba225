//! Shared types for the iota-remote facilities
//!
//! - **Request identity**: `RequestId`, the identifier a result uses to refer
//!   back to the action that produced it
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction
//! - **Schema constants**: canonical field keys and event names for logging

pub mod request;
pub mod schema;
pub mod sensitive;

pub use request::RequestId;
pub use sensitive::Sensitive;
