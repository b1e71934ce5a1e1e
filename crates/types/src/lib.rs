use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

mod validators;

pub use alloy_primitives as primitives;
pub use validators::{is_eth_address, ValidationError};

/// Value attached to transactions that don't transfer any ether
pub const DEFAULT_NULL_VALUE_ON_TX: U256 = U256::ZERO;

/// Gas limit used when a transaction can't be estimated yet, for example while
/// an approval it depends on is still pending.
pub const DEFAULT_GAS_LIMIT: u64 = 210_000;

/// Parameters accepted by the faucet contract methods
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaucetParams {
    pub user_address: String,
}

impl FaucetParams {
    pub fn new(user_address: impl Into<String>) -> Self {
        Self {
            user_address: user_address.into(),
        }
    }

    /// Check the parameters are well formed, returning the parsed user address
    pub fn validate(&self) -> Result<Address, ValidationError> {
        is_eth_address("userAddress", &self.user_address)
    }
}

/// Tag identifying what a built transaction does
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EthereumTxType {
    Erc20Approval,
    DlpAction,
    FaucetMint,
}

impl std::fmt::Display for EthereumTxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Erc20Approval => "ERC20_APPROVAL",
            Self::DlpAction => "DLP_ACTION",
            Self::FaucetMint => "FAUCET_MINT",
        })
    }
}

/// Gas limit and price for a transaction
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GasType {
    pub gas_limit: u64,
    pub gas_price: u128,
}
