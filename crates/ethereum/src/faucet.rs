use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use faucet_types::{EthereumTxType, FaucetParams, DEFAULT_NULL_VALUE_ON_TX};
use tracing::{debug, instrument};

use crate::{
    builder::{GasEstimation, TxBuilder, TxCallback},
    contracts::IFaucet::{self, IFaucetInstance},
    ClientError, EthConfig,
};

/// An unsigned transaction to be signed and broadcast by the caller
pub struct TransactionDescriptor<P> {
    pub tx: TxCallback<P>,
    pub tx_type: EthereumTxType,
    pub gas: GasEstimation<P>,
}

/// Client for the faucet contract methods
#[derive(Clone)]
pub struct FaucetService<P> {
    builder: TxBuilder<P>,
    faucet_address: Option<Address>,
}

impl<P: Provider + Clone + 'static> FaucetService<P> {
    /// Create a new service. The faucet address is not checked until a call targets it.
    pub fn new(provider: P, faucet_address: Option<Address>) -> Self {
        Self {
            builder: TxBuilder::new(provider),
            faucet_address,
        }
    }

    pub fn from_config(provider: P, config: &EthConfig) -> Self {
        debug!(?config);
        Self {
            builder: TxBuilder::new(provider).with_gas_surplus(config.gas_surplus),
            faucet_address: config.faucet,
        }
    }

    pub fn faucet_address(&self) -> Option<Address> {
        self.faucet_address
    }

    fn contract(&self) -> Option<IFaucetInstance<P>> {
        self.faucet_address
            .map(|address| IFaucet::new(address, self.builder.provider().clone()))
    }

    /// Build the `mintAll` transaction for a user. The returned callbacks don't
    /// touch the network until called.
    pub fn mint(&self, params: &FaucetParams) -> Result<Vec<TransactionDescriptor<P>>, ClientError> {
        let user = params.validate()?;

        let contract = self.contract();
        let tx = self.builder.generate_tx_callback(
            move || {
                let contract = contract.as_ref().ok_or(ClientError::MissingFaucetAddress)?;
                Ok(contract.mintAll().into_transaction_request())
            },
            user,
            Some(DEFAULT_NULL_VALUE_ON_TX),
        );
        let gas = self.builder.generate_tx_price_estimation(&[], &tx);

        Ok(vec![TransactionDescriptor {
            tx,
            tx_type: EthereumTxType::FaucetMint,
            gas,
        }])
    }

    /// Read the last time a user minted from the faucet
    #[instrument(skip(self), fields(faucet = ?self.faucet_address))]
    pub async fn last_mint_time(&self, params: &FaucetParams) -> Result<U256, ClientError> {
        let user = params.validate()?;
        let contract = self.contract().ok_or(ClientError::MissingFaucetAddress)?;

        let time = contract.lastMintTime(user).call().await?;
        debug!(%user, %time, "last mint time");
        Ok(time)
    }
}
