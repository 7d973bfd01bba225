//! Signed transactions in their tryte encoding

use crate::errors::{RemoteApiError, Result};
use crate::types::trytes::Trytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Length of a serialized transaction in trytes
pub const TRANSACTION_TRYTES_LEN: usize = 2673;

const ADDRESS: Range<usize> = 2187..2268;
const BUNDLE: Range<usize> = 2349..2430;
const TAG: Range<usize> = 2592..2619;
const NONCE: Range<usize> = 2646..2673;

/// A transaction as returned by `attachToTangle`, ready for broadcast
///
/// Only the shape (tryte alphabet and length) is checked. Signatures, hashes
/// and bundle consistency are the node's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PersistedTransaction", into = "PersistedTransaction")]
pub struct Transaction {
    trytes: Trytes,
}

/// Plain persisted form of a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedTransaction {
    trytes: String,
}

impl Transaction {
    /// Build a transaction from its tryte encoding
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransaction` if the value is not exactly
    /// `TRANSACTION_TRYTES_LEN` trytes long.
    pub fn from_trytes(trytes: Trytes) -> Result<Self> {
        if trytes.len() != TRANSACTION_TRYTES_LEN {
            return Err(RemoteApiError::InvalidTransaction {
                reason: format!(
                    "expected {} trytes, got {}",
                    TRANSACTION_TRYTES_LEN,
                    trytes.len()
                ),
            });
        }
        Ok(Self { trytes })
    }

    /// Canonical wire encoding
    pub fn trytes(&self) -> &Trytes {
        &self.trytes
    }

    pub fn address(&self) -> &str {
        &self.trytes.as_str()[ADDRESS]
    }

    pub fn bundle(&self) -> &str {
        &self.trytes.as_str()[BUNDLE]
    }

    pub fn tag(&self) -> &str {
        &self.trytes.as_str()[TAG]
    }

    pub fn nonce(&self) -> &str {
        &self.trytes.as_str()[NONCE]
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.trytes, f)
    }
}

impl FromStr for Transaction {
    type Err = RemoteApiError;

    fn from_str(s: &str) -> Result<Self> {
        let trytes = Trytes::new(s).map_err(|e| RemoteApiError::InvalidTransaction {
            reason: e.to_string(),
        })?;
        Self::from_trytes(trytes)
    }
}

impl TryFrom<PersistedTransaction> for Transaction {
    type Error = RemoteApiError;

    fn try_from(persisted: PersistedTransaction) -> Result<Self> {
        persisted.trytes.parse()
    }
}

impl From<Transaction> for PersistedTransaction {
    fn from(tx: Transaction) -> Self {
        Self {
            trytes: tx.trytes.into(),
        }
    }
}
