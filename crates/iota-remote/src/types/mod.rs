//! Domain value types sent to and persisted for the node
//!
//! Both types are validated on construction, so any value that exists is
//! already in the canonical wire form the node expects.

pub mod transaction;
pub mod trytes;

pub use transaction::Transaction;
pub use trytes::Trytes;
