//! Node command inventory
//!
//! Every action this client can dispatch is identified by one `Command`. The
//! string form is the literal the node expects in the `"command"` field.

use crate::errors::RemoteApiError;
use std::fmt;
use std::str::FromStr;

/// Commands supported by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rebroadcast attached transactions to all neighbors
    BroadcastTransactions,

    /// Abort a running `attachToTangle` proof of work
    InterruptAttachingToTangle,
}

impl Command {
    /// All supported commands
    pub const ALL: [Command; 2] = [
        Command::BroadcastTransactions,
        Command::InterruptAttachingToTangle,
    ];

    /// Wire literal for the `"command"` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::BroadcastTransactions => "broadcastTransactions",
            Command::InterruptAttachingToTangle => "interruptAttachingToTangle",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = RemoteApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RemoteApiError::UnknownCommand {
                command: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_literals() {
        assert_eq!(
            Command::BroadcastTransactions.as_str(),
            "broadcastTransactions"
        );
        assert_eq!(
            Command::InterruptAttachingToTangle.as_str(),
            "interruptAttachingToTangle"
        );
    }

    #[test]
    fn test_parse_round_trips_every_command() {
        for command in Command::ALL {
            assert_eq!(command.as_str().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = "getNodeInfo".parse::<Command>().unwrap_err();
        assert_eq!(
            err,
            RemoteApiError::UnknownCommand {
                command: "getNodeInfo".to_string()
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("BroadcastTransactions".parse::<Command>().is_err());
    }
}
