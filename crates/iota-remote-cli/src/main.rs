//! iota-remote CLI
//!
//! Sends node commands from the shell and manages persisted actions

use clap::{Parser, Subcommand};
use iota_remote::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "iota-remote")]
#[command(about = "Send commands to an IOTA node", long_about = None)]
struct Cli {
    #[command(flatten)]
    node: commands::NodeOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Broadcast transactions to the node's neighbors
    Broadcast(commands::broadcast::BroadcastArgs),
    /// Interrupt a running attachToTangle
    Interrupt(commands::interrupt::InterruptArgs),
    /// Execute a persisted action read from a file
    Replay(commands::replay::ReplayArgs),
    /// Write a persisted broadcast action to a file
    Persist(commands::persist::PersistArgs),
}

fn main() {
    init(Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Broadcast(args) => commands::broadcast::execute(&cli.node, args),
        Commands::Interrupt(args) => commands::interrupt::execute(&cli.node, args),
        Commands::Replay(args) => commands::replay::execute(&cli.node, args),
        Commands::Persist(args) => commands::persist::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
