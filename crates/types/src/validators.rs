use alloy_primitives::Address;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Address: {value} is not a valid ethereum Address (field: {field})")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate an ethereum address string for the given parameter.
///
/// Accepts 40 hex characters with an optional `0x` prefix. Mixed case input
/// must carry a valid EIP-55 checksum; all lower or all upper case is taken as
/// unchecksummed.
pub fn is_eth_address(field: &'static str, value: &str) -> Result<Address, ValidationError> {
    let invalid = || ValidationError::InvalidAddress {
        field,
        value: value.to_string(),
    };

    let hex = value.strip_prefix("0x").unwrap_or(value);
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let address: Address = hex.parse().map_err(|_| invalid())?;

    let lower = hex.bytes().all(|b| !b.is_ascii_uppercase());
    let upper = hex.bytes().all(|b| !b.is_ascii_lowercase());
    if !lower && !upper && address.to_checksum(None)[2..] != *hex {
        return Err(invalid());
    }

    Ok(address)
}
