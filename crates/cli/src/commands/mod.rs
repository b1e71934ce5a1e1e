use alloy::providers::ProviderBuilder;
use clap::Subcommand;
use color_eyre::{eyre::WrapErr, Result};

use faucet_ethereum::FaucetService;

use crate::config::Config;

mod last_mint_time;
mod mint;

#[derive(Subcommand)]
pub enum Command {
    /// Build an unsigned faucet mint transaction for a user and print it as json.
    Mint(mint::MintArgs),
    /// Query the last time a user minted from the faucet.
    LastMintTime(last_mint_time::LastMintTimeArgs),
}

impl Command {
    /// Run the given command
    pub fn execute(self, config: Config) -> Result<()> {
        tokio::runtime::Runtime::new()?.block_on(async move {
            let provider = ProviderBuilder::new()
                .connect(config.eth.rpc.as_str())
                .await
                .wrap_err("connect http")?;
            let service = FaucetService::from_config(provider, &config.eth);

            match self {
                Command::Mint(args) => args.execute(service).await,
                Command::LastMintTime(args) => args.execute(service).await,
            }
        })
    }
}
