//! Broadcast command
//!
//! Usage: iota-remote broadcast <TRYTES>... [--save-result <FILE>]

use clap::Args;
use iota_remote::{BroadcastTransactions, NodeAction};
use std::path::PathBuf;

use super::NodeOptions;

#[derive(Debug, Args)]
pub struct BroadcastArgs {
    /// Transactions as 2673-tryte strings
    #[arg(required = true)]
    pub trytes: Vec<String>,

    /// Also write the persisted result to this file
    #[arg(long)]
    pub save_result: Option<PathBuf>,
}

pub fn execute(node: &NodeOptions, args: BroadcastArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut action = BroadcastTransactions::new();
    action.set_transaction_trytes(&args.trytes)?;

    let client = node.connect()?;
    let result = NodeAction::from(action).execute(&client)?;
    super::report(&result, args.save_result.as_deref())
}
