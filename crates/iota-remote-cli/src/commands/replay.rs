//! Replay command
//!
//! Usage: iota-remote replay <FILE> [--save-result <FILE>]
//!
//! The file holds a persisted action as written by `persist`.

use clap::Args;
use iota_remote::NodeAction;
use std::path::PathBuf;

use super::NodeOptions;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Persisted action (JSON)
    pub file: PathBuf,

    /// Also write the persisted result to this file
    #[arg(long)]
    pub save_result: Option<PathBuf>,
}

pub fn execute(node: &NodeOptions, args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.file)?;
    // Parse before connecting so a bad file never touches the network.
    let action = NodeAction::from_json(&text)?;

    let client = node.connect()?;
    let result = action.execute(&client)?;
    super::report(&result, args.save_result.as_deref())
}
