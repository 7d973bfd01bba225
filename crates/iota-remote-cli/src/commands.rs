//! Subcommands and the node options they share

use clap::Args;
use iota_remote::{HttpNodeApiClient, NodeActionResult, NodeConfig};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub mod broadcast;
pub mod interrupt;
pub mod persist;
pub mod replay;

#[derive(Debug, Args)]
pub struct NodeOptions {
    /// Node command endpoint, overriding config and IOTA_NODE_URL
    #[arg(long, global = true)]
    pub node: Option<String>,

    /// TOML file with node settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl NodeOptions {
    /// Config file, then environment, then `--node`
    pub fn load_config(&self) -> Result<NodeConfig, Box<dyn std::error::Error>> {
        let mut config = NodeConfig::load(self.config.as_deref())?;
        if let Some(node) = &self.node {
            config.endpoint = node.clone();
            config.validate()?;
        }
        Ok(config)
    }

    pub fn connect(&self) -> Result<HttpNodeApiClient, Box<dyn std::error::Error>> {
        Ok(HttpNodeApiClient::new(&self.load_config()?)?)
    }
}

/// Print a persisted result and optionally keep a copy on disk
pub fn report(
    result: &NodeActionResult,
    save_to: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = serde_json::to_string_pretty(&Value::Object(result.serialize()))?;
    if let Some(path) = save_to {
        std::fs::write(path, &rendered)?;
    }
    println!("{}", rendered);
    if let Some(duration) = result.duration() {
        eprintln!("✓ {} completed in {} ms", result.command(), duration);
    }
    Ok(())
}
