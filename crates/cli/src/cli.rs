use std::path::PathBuf;

use alloy::primitives::Address;
use clap::Parser;
use url::Url;

use crate::commands::Command;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Path to the config file
    #[arg(short, long, global = true, env = "FAUCET_CONFIG")]
    pub config: Option<PathBuf>,

    /* Config overrides */
    /// HTTP RPC URL for contract calls
    #[arg(long, global = true)]
    pub rpc: Option<Url>,
    /// Address of the deployed faucet contract
    #[arg(long, global = true)]
    pub faucet: Option<Address>,
    /// Percentage added on top of gas estimates
    #[arg(long, global = true)]
    pub gas_surplus: Option<u64>,

    #[command(subcommand)]
    pub cmd: Command,
}
