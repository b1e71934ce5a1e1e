use alloy::transports::{RpcError, TransportErrorKind};
use faucet_types::ValidationError;

mod builder;
mod config;
mod contracts;
mod faucet;


pub use builder::{GasEstimation, TxBuilder, TxCallback, DEFAULT_SURPLUS};
pub use config::EthConfig;
pub use contracts::IFaucet;
pub use faucet::{FaucetService, TransactionDescriptor};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid parameters: {0}")]
    Validation(#[from] ValidationError),
    #[error("RPC Error: {0:?}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("Contract call failed: {0:?}")]
    Contract(#[from] alloy::contract::Error),
    #[error("Faucet contract address is not configured")]
    MissingFaucetAddress,
    #[error("Transaction is missing a gas limit")]
    MissingGasLimit,
}
