// CLI - Command line interface for inspecting chain parameters

pub mod config;
pub mod runner;

use clap::{Args, Parser, Subcommand};

/// QBIC chain parameters - Inspect network profiles, genesis blocks and checkpoints
#[derive(Parser, Debug)]
#[command(name = "qbic-params")]
#[command(author = "QBIC Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect QBIC network parameter profiles")]
#[command(long_about = r#"
Prints the constants a QBIC node runs with on each network.

Show the main network profile:
  qbic-params show

Rebuild and verify the testnet genesis block:
  qbic-params --testnet genesis

Look up a checkpoint:
  qbic-params --network regtest checkpoints --height 0
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub network: NetworkArgs,

    /// Enable verbose output
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", env = "QBIC_LOG")]
    pub log_level: String,
}

/// Network selection
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Network name (main, test, regtest, unittest)
    #[arg(short, long, global = true, env = "QBIC_NETWORK")]
    pub network: Option<String>,

    /// Use the test network
    #[arg(long, global = true)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long, global = true)]
    pub regtest: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the selected profile as JSON
    Show,

    /// Rebuild the genesis block and check it against the declared constants
    Genesis,

    /// List checkpoints or estimate sync progress
    Checkpoints(CheckpointsCmd),

    /// Print fixed seed addresses and DNS seeds
    Seeds,

    /// Derive the zerocoin accumulator modulus
    Zerocoin(ZerocoinCmd),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckpointsCmd {
    /// Only show the checkpoint at this height
    #[arg(long)]
    pub height: Option<i32>,

    /// Transactions in the chain so far, for a progress estimate
    #[arg(long, requires = "block_time")]
    pub chain_tx: Option<u64>,

    /// Timestamp of the current tip, for a progress estimate
    #[arg(long, requires = "chain_tx")]
    pub block_time: Option<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ZerocoinCmd {
    /// Read the modulus digits as hex (legacy v1 parameters)
    #[arg(long)]
    pub v1: bool,
}
