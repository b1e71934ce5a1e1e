use std::sync::Arc;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use faucet_types::{EthereumTxType, GasType, DEFAULT_GAS_LIMIT, DEFAULT_NULL_VALUE_ON_TX};
use tracing::{debug, trace};

use crate::ClientError;

/// Default percentage added on top of gas estimates
pub const DEFAULT_SURPLUS: u64 = 30;

type RawTx = Arc<dyn Fn() -> Result<TransactionRequest, ClientError> + Send + Sync>;

/// Shared helper for building deferred transactions and their gas estimates
#[derive(Clone)]
pub struct TxBuilder<P> {
    provider: P,
    gas_surplus: u64,
}

impl<P: Provider + Clone + 'static> TxBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            gas_surplus: DEFAULT_SURPLUS,
        }
    }

    pub fn with_gas_surplus(mut self, gas_surplus: u64) -> Self {
        self.gas_surplus = gas_surplus;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn gas_surplus(&self) -> u64 {
        self.gas_surplus
    }

    /// Wrap a raw transaction producer into a callback populating the sender,
    /// value, and an estimated gas limit. Nothing runs until the callback is called.
    pub fn generate_tx_callback<F>(
        &self,
        raw_tx: F,
        from: Address,
        value: Option<U256>,
    ) -> TxCallback<P>
    where
        F: Fn() -> Result<TransactionRequest, ClientError> + Send + Sync + 'static,
    {
        TxCallback {
            provider: self.provider.clone(),
            raw_tx: Arc::new(raw_tx),
            from,
            value: value.unwrap_or(DEFAULT_NULL_VALUE_ON_TX),
            gas_surplus: self.gas_surplus,
        }
    }

    /// Build a deferred gas estimation for a transaction callback. `pending`
    /// holds the types of transactions that have to be mined beforehand.
    pub fn generate_tx_price_estimation(
        &self,
        pending: &[EthereumTxType],
        tx_callback: &TxCallback<P>,
    ) -> GasEstimation<P> {
        GasEstimation {
            provider: self.provider.clone(),
            has_pending_approvals: pending.contains(&EthereumTxType::Erc20Approval),
            tx_callback: tx_callback.clone(),
        }
    }
}

/// Deferred producer of a populated transaction request
#[derive(Clone)]
pub struct TxCallback<P> {
    provider: P,
    raw_tx: RawTx,
    from: Address,
    value: U256,
    gas_surplus: u64,
}

impl<P: Provider> TxCallback<P> {
    pub fn sender(&self) -> Address {
        self.from
    }

    /// Build the raw transaction and estimate its gas limit
    pub async fn call(&self) -> Result<TransactionRequest, ClientError> {
        let tx = (self.raw_tx)()?
            .with_from(self.from)
            .with_value(self.value);

        let estimated = self.provider.estimate_gas(tx.clone()).await?;
        let gas_limit = with_surplus(estimated, self.gas_surplus);
        trace!(estimated, gas_limit, surplus = self.gas_surplus);

        let tx = tx.with_gas_limit(gas_limit);
        debug!(?tx, "populated transaction");
        Ok(tx)
    }
}

/// Deferred producer of a transaction's gas limit and price
#[derive(Clone)]
pub struct GasEstimation<P> {
    provider: P,
    has_pending_approvals: bool,
    tx_callback: TxCallback<P>,
}

impl<P: Provider> GasEstimation<P> {
    /// Estimate the gas for the transaction. While an approval is pending the
    /// transaction can't be simulated, so a default limit is used unless `force` is set.
    pub async fn estimate(&self, force: bool) -> Result<GasType, ClientError> {
        if self.has_pending_approvals && !force {
            return self.default_estimate().await;
        }

        let tx = self.tx_callback.call().await?;
        self.estimate_populated(&tx, true).await
    }

    /// Same as [`Self::estimate`], reusing a transaction already built by the
    /// callback instead of simulating it again.
    pub async fn estimate_populated(
        &self,
        tx: &TransactionRequest,
        force: bool,
    ) -> Result<GasType, ClientError> {
        if self.has_pending_approvals && !force {
            return self.default_estimate().await;
        }

        let gas_limit = tx.gas.ok_or(ClientError::MissingGasLimit)?;
        let gas_price = match tx.gas_price {
            Some(price) => price,
            None => self.provider.get_gas_price().await?,
        };
        debug!(gas_limit, gas_price, "estimated gas");

        Ok(GasType {
            gas_limit,
            gas_price,
        })
    }

    async fn default_estimate(&self) -> Result<GasType, ClientError> {
        let gas_price = self.provider.get_gas_price().await?;
        debug!(gas_price, "pending approvals, using default gas limit");
        Ok(GasType {
            gas_limit: DEFAULT_GAS_LIMIT,
            gas_price,
        })
    }
}

fn with_surplus(gas: u64, surplus: u64) -> u64 {
    gas.saturating_add(gas.saturating_mul(surplus) / 100)
}
