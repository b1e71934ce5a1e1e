use std::io::Write;

use alloy::providers::Provider;
use clap::Args;
use color_eyre::Result;
use serde_json::json;
use tracing::info;

use faucet_ethereum::FaucetService;
use faucet_types::FaucetParams;

#[derive(Args)]
pub struct MintArgs {
    /// Account receiving the minted funds
    user: String,
    /// Also estimate the gas limit and price
    #[arg(short, long)]
    estimate: bool,
    /// Use the simulated gas limit even when approvals are pending
    #[arg(long, requires = "estimate")]
    force: bool,
}

impl MintArgs {
    pub async fn execute<P: Provider + Clone + 'static>(
        self,
        service: FaucetService<P>,
    ) -> Result<()> {
        self.run(service, &mut std::io::stdout().lock()).await
    }

    /// Build the mint transactions, writing one json object per transaction
    async fn run<P: Provider + Clone + 'static>(
        self,
        service: FaucetService<P>,
        out: &mut impl Write,
    ) -> Result<()> {
        let params = FaucetParams::new(self.user);

        for descriptor in service.mint(&params)? {
            info!(tx_type = %descriptor.tx_type, from = %descriptor.tx.sender(), "built transaction");
            let tx = descriptor.tx.call().await?;

            let mut json = json!({ "txType": descriptor.tx_type, "tx": tx });
            if self.estimate {
                let gas = descriptor.gas.estimate_populated(&tx, self.force).await?;
                json["gas"] = serde_json::to_value(gas)?;
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }

        Ok(())
    }
}
