//! Persist command
//!
//! Usage: iota-remote persist <TRYTES>... --output <FILE>

use clap::Args;
use iota_remote::{Action, BroadcastTransactions};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PersistArgs {
    /// Transactions as 2673-tryte strings
    #[arg(required = true)]
    pub trytes: Vec<String>,

    /// Where to write the persisted action
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Validate, write the action and print its cache key
pub fn execute(args: PersistArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut action = BroadcastTransactions::new();
    action.set_transaction_trytes(&args.trytes)?;

    let persisted = action.serialize()?;
    std::fs::write(
        &args.output,
        serde_json::to_string_pretty(&Value::Object(persisted))?,
    )?;

    println!("{}", action.cache_key());
    Ok(())
}
