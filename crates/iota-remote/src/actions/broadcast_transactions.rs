//! `broadcastTransactions`
//!
//! Broadcasts a list of attached transactions to all neighbors of the node.
//! The transactions are the output of `attachToTangle`.

use crate::action::{command_map, expect_command, Action, ExecutableAction};
use crate::commands::Command;
use crate::errors::{RemoteApiError, Result};
use crate::serialize_util;
use crate::types::Transaction;
use serde::Deserialize;
use serde_json::{Map, Value};

const WIRE_KEY: &str = "trytes";
const PERSISTED_KEY: &str = "transactions";

/// Rebroadcast request
///
/// Order is preserved and duplicates are kept: resending the same
/// transaction is a legitimate rebroadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastTransactions {
    transactions: Vec<Transaction>,
}

/// Successful `broadcastTransactions` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BroadcastTransactionsResponse {
    /// Node-side processing time in milliseconds
    #[serde(default)]
    pub duration: Option<u64>,
}

impl BroadcastTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions<I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = Transaction>,
    {
        Self {
            transactions: transactions.into_iter().collect(),
        }
    }

    /// Replace all transactions
    pub fn set_transactions<I>(&mut self, transactions: I) -> &mut Self
    where
        I: IntoIterator<Item = Transaction>,
    {
        self.transactions = transactions.into_iter().collect();
        self
    }

    /// Append one transaction
    pub fn add_transaction(&mut self, transaction: Transaction) -> &mut Self {
        self.transactions.push(transaction);
        self
    }

    /// Parse and append one transaction from its tryte encoding
    ///
    /// # Errors
    ///
    /// `InvalidTransaction` if `trytes` is not a well-formed transaction; the
    /// action is left unchanged.
    pub fn add_transaction_trytes(&mut self, trytes: &str) -> Result<&mut Self> {
        let transaction = trytes.parse()?;
        Ok(self.add_transaction(transaction))
    }

    /// Parse and replace all transactions
    ///
    /// # Errors
    ///
    /// `InvalidTransaction` for the first malformed entry; the action is left
    /// unchanged when any entry fails.
    pub fn set_transaction_trytes<I, S>(&mut self, trytes: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = trytes
            .into_iter()
            .enumerate()
            .map(|(index, t)| {
                t.as_ref()
                    .parse::<Transaction>()
                    .map_err(|e| RemoteApiError::InvalidTransaction {
                        reason: format!("entry {}: {}", index, e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.set_transactions(parsed))
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Rebuild an action from `serialize` output
    ///
    /// # Errors
    ///
    /// `InvalidPersistedForm` if the map belongs to another command, lacks the
    /// transaction list, or holds a malformed transaction.
    pub fn deserialize(persisted: &Map<String, Value>) -> Result<Self> {
        expect_command(persisted, Command::BroadcastTransactions)?;
        let entries = persisted
            .get(PERSISTED_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| RemoteApiError::InvalidPersistedForm {
                reason: format!("missing {} array", PERSISTED_KEY),
            })?;
        Ok(Self {
            transactions: serialize_util::deserialize_array(entries)?,
        })
    }
}

impl Action for BroadcastTransactions {
    fn command(&self) -> Command {
        Command::BroadcastTransactions
    }

    fn json_serialize(&self) -> Map<String, Value> {
        let mut payload = command_map(self.command());
        payload.insert(
            WIRE_KEY.to_string(),
            self.transactions
                .iter()
                .map(|tx| Value::String(tx.to_string()))
                .collect(),
        );
        payload
    }

    fn serialize(&self) -> Result<Map<String, Value>> {
        let mut persisted = command_map(self.command());
        persisted.insert(
            PERSISTED_KEY.to_string(),
            Value::Array(serialize_util::serialize_array(&self.transactions)?),
        );
        Ok(persisted)
    }
}

impl ExecutableAction for BroadcastTransactions {
    type Response = BroadcastTransactionsResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::TRANSACTION_TRYTES_LEN;

    fn tx(fill: char) -> Transaction {
        std::iter::repeat(fill)
            .take(TRANSACTION_TRYTES_LEN)
            .collect::<String>()
            .parse()
            .unwrap()
    }

    #[test]
    fn test_empty_action_payload() {
        let payload = BroadcastTransactions::new().json_serialize();
        assert_eq!(payload["command"], "broadcastTransactions");
        assert_eq!(payload["trytes"], Value::Array(vec![]));
    }

    #[test]
    fn test_set_replaces_add_appends() {
        let mut action = BroadcastTransactions::new();
        action.add_transaction(tx('A')).add_transaction(tx('B'));
        assert_eq!(action.transactions().len(), 2);

        action.set_transactions([tx('C')]);
        assert_eq!(action.transactions(), &[tx('C')]);
    }

    #[test]
    fn test_add_transaction_trytes_rejects_and_leaves_state() {
        let mut action = BroadcastTransactions::with_transactions([tx('A')]);
        let err = action.add_transaction_trytes("TOOSHORT").unwrap_err();
        assert!(matches!(err, RemoteApiError::InvalidTransaction { .. }));
        assert_eq!(action.transactions(), &[tx('A')]);
    }

    #[test]
    fn test_set_transaction_trytes_is_all_or_nothing() {
        let mut action = BroadcastTransactions::with_transactions([tx('A')]);
        let good = tx('B').to_string();
        let err = action
            .set_transaction_trytes([good.as_str(), "bad"])
            .unwrap_err();

        match err {
            RemoteApiError::InvalidTransaction { reason } => assert!(reason.starts_with("entry 1")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(action.transactions(), &[tx('A')]);
    }

    #[test]
    fn test_deserialize_rejects_missing_list() {
        let persisted = command_map(Command::BroadcastTransactions);
        assert!(matches!(
            BroadcastTransactions::deserialize(&persisted),
            Err(RemoteApiError::InvalidPersistedForm { .. })
        ));
    }

    #[test]
    fn test_response_tolerates_unknown_fields() {
        let response: BroadcastTransactionsResponse =
            serde_json::from_str(r#"{"duration":12,"someField":"value"}"#).unwrap();
        assert_eq!(response.duration, Some(12));
    }
}
