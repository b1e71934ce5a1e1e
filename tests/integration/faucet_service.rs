use alloy::{
    primitives::{Address, Bytes, TxKind, U128, U256, U64},
    sol_types::SolValue,
};
use eyre::Result;
use faucet_ethereum::{ClientError, EthConfig, FaucetService};
use faucet_types::{EthereumTxType, FaucetParams, GasType};
use tracing::info;

use crate::common::{init_test_logging, mocked_provider, FAUCET, USER};

#[derive(serde::Deserialize)]
struct Config {
    eth: EthConfig,
}

fn config_from_toml(gas_surplus: u64) -> Result<EthConfig> {
    let raw = format!("[eth]\nfaucet = \"{FAUCET}\"\ngas_surplus = {gas_surplus}\n");
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, raw)?;
    let config: Config = toml::from_str(&std::fs::read_to_string(&path)?)?;
    Ok(config.eth)
}

/// Build a mint transaction, estimate it, then read back the rate limit timestamp
#[tokio::test]
async fn mint_flow_from_config() -> Result<()> {
    init_test_logging();
    let (asserter, provider) = mocked_provider();
    let config = config_from_toml(50)?;
    assert_eq!(config.faucet, Some(FAUCET));

    let service = FaucetService::from_config(provider, &config);
    let params: FaucetParams = serde_json::from_value(serde_json::json!({ "userAddress": USER }))?;

    let mut txs = service.mint(&params)?;
    assert_eq!(txs.len(), 1);
    let descriptor = txs.remove(0);
    assert_eq!(descriptor.tx_type, EthereumTxType::FaucetMint);

    // tx callback: eth_estimateGas
    asserter.push_success(&U64::from(40_000));
    let tx = descriptor.tx.call().await?;
    info!(?tx, "built mint transaction");
    assert_eq!(tx.to, Some(TxKind::Call(FAUCET)));
    assert_eq!(tx.from, Some(params.validate()?));
    assert_eq!(tx.value, Some(U256::ZERO));
    assert_eq!(tx.gas, Some(60_000));

    // gas estimation: eth_estimateGas then eth_gasPrice
    asserter.push_success(&U64::from(40_000));
    asserter.push_success(&U128::from(3_000_000_000u64));
    assert_eq!(
        descriptor.gas.estimate(false).await?,
        GasType {
            gas_limit: 60_000,
            gas_price: 3_000_000_000,
        }
    );

    let minted_at = U256::from(1_718_000_000u64);
    asserter.push_success(&Bytes::from(minted_at.abi_encode()));
    assert_eq!(service.last_mint_time(&params).await?, minted_at);
    Ok(())
}

#[tokio::test]
async fn serialized_descriptor() -> Result<()> {
    let (asserter, provider) = mocked_provider();
    let service = FaucetService::new(provider, Some(FAUCET));
    let txs = service.mint(&FaucetParams::new(USER.to_lowercase()))?;

    asserter.push_success(&U64::from(21_000));
    let tx = txs[0].tx.call().await?;
    let json = serde_json::to_value(&tx)?;
    let from: Address = serde_json::from_value(json["from"].clone())?;
    assert_eq!(from, USER.parse::<Address>()?);
    assert_eq!(json["value"], serde_json::json!("0x0"));
    assert_eq!(serde_json::to_value(txs[0].tx_type)?, "FAUCET_MINT");
    Ok(())
}

#[tokio::test]
async fn contract_revert_is_surfaced() -> Result<()> {
    let (asserter, provider) = mocked_provider();
    let service = FaucetService::new(provider, Some(FAUCET));

    asserter.push_failure_msg("execution reverted");
    let err = service
        .last_mint_time(&FaucetParams::new(USER))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Contract(_)), "{err}");
    Ok(())
}

#[tokio::test]
async fn service_without_faucet_address() -> Result<()> {
    let (_asserter, provider) = mocked_provider();
    let service = FaucetService::new(provider, None);

    let txs = service.mint(&FaucetParams::new(USER))?;
    assert_eq!(txs[0].tx_type, EthereumTxType::FaucetMint);
    assert!(matches!(
        txs[0].tx.call().await,
        Err(ClientError::MissingFaucetAddress)
    ));
    Ok(())
}

#[tokio::test]
async fn malformed_user_address() {
    let (_asserter, provider) = mocked_provider();
    let service = FaucetService::new(provider, Some(FAUCET));

    let params = FaucetParams::new("not an address");
    assert!(matches!(
        service.mint(&params),
        Err(ClientError::Validation(_))
    ));
    assert!(matches!(
        service.last_mint_time(&params).await,
        Err(ClientError::Validation(_))
    ));
}
