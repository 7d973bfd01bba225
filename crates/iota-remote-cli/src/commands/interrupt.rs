//! Interrupt command
//!
//! Usage: iota-remote interrupt [--save-result <FILE>]

use clap::Args;
use iota_remote::{InterruptAttachingToTangle, NodeAction};
use std::path::PathBuf;

use super::NodeOptions;

#[derive(Debug, Args)]
pub struct InterruptArgs {
    /// Also write the persisted result to this file
    #[arg(long)]
    pub save_result: Option<PathBuf>,
}

pub fn execute(node: &NodeOptions, args: InterruptArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = node.connect()?;
    let result = NodeAction::from(InterruptAttachingToTangle::new()).execute(&client)?;
    super::report(&result, args.save_result.as_deref())
}
