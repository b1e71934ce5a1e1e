use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::builder::DEFAULT_SURPLUS;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EthConfig {
    /// Url for rpc commands
    pub rpc: Url,
    /// Deployed faucet contract. Left unset, only the mint descriptor can be built.
    pub faucet: Option<Address>,
    /// Percentage added on top of the node's gas estimate
    pub gas_surplus: u64,
}

impl std::fmt::Debug for EthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Hide potentially sensitive query parameters
        f.debug_struct("EthConfig")
            .field("rpc", &self.rpc.host_str().unwrap_or("missing rpc host"))
            .field("faucet", &self.faucet)
            .field("gas_surplus", &self.gas_surplus)
            .finish()
    }
}

impl Default for EthConfig {
    fn default() -> Self {
        Self {
            rpc: "https://ethereum-sepolia-rpc.publicnode.com".parse().unwrap(),
            faucet: None,
            gas_surplus: DEFAULT_SURPLUS,
        }
    }
}
