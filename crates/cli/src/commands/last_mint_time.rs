use std::io::Write;

use alloy::providers::Provider;
use clap::Args;
use color_eyre::Result;

use faucet_ethereum::FaucetService;
use faucet_types::FaucetParams;

#[derive(Args)]
pub struct LastMintTimeArgs {
    /// Account to query
    user: String,
}

impl LastMintTimeArgs {
    pub async fn execute<P: Provider + Clone + 'static>(
        self,
        service: FaucetService<P>,
    ) -> Result<()> {
        self.run(service, &mut std::io::stdout().lock()).await
    }

    async fn run<P: Provider + Clone + 'static>(
        self,
        service: FaucetService<P>,
        out: &mut impl Write,
    ) -> Result<()> {
        let time = service
            .last_mint_time(&FaucetParams::new(self.user))
            .await?;
        writeln!(out, "{time}")?;
        Ok(())
    }
}
