//! Account address standardization. Addresses come in from URLs, the node API and the indexer with
//! or without `0x`, with or without leading zeros, and in mixed case. We compare and key on the
//! long form: `0x` followed by 64 lowercase hex digits.

use thiserror::Error;
use tracing::trace;

pub const ADDRESS_HEX_LENGTH: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address {0:?} contains non-hex characters")]
    InvalidHex(String),
    #[error("address {0:?} is longer than 64 hex digits")]
    TooLong(String),
}

fn strip_hex_prefix(address: &str) -> &str {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
}

/// Standardizes an address to its long form, failing on anything that isn't 1 to 64 hex digits
/// with an optional `0x` prefix.
pub fn normalize_address(address: &str) -> Result<String, AddressError> {
    let hex = strip_hex_prefix(address);

    if hex.is_empty() {
        return Err(AddressError::Empty);
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex(address.to_string()));
    }

    if hex.len() > ADDRESS_HEX_LENGTH {
        return Err(AddressError::TooLong(address.to_string()));
    }

    Ok(format!(
        "0x{:0>width$}",
        hex.to_ascii_lowercase(),
        width = ADDRESS_HEX_LENGTH
    ))
}

/// Like [`normalize_address`] but for input that may be absent or malformed, e.g. a route
/// parameter. `None` means no address could be determined.
pub fn try_normalize_address(address: Option<&str>) -> Option<String> {
    let address = address?;
    match normalize_address(address) {
        Ok(normalized) => Some(normalized),
        Err(error) => {
            trace!(%error, "could not normalize address");
            None
        }
    }
}

pub fn is_valid_account_address(address: &str) -> bool {
    normalize_address(address).is_ok()
}

/// Two addresses are equal when both are valid and standardize to the same long form.
pub fn addresses_equal(a: &str, b: &str) -> bool {
    match (normalize_address(a), normalize_address(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Shortens an address for display, `0x1234...abcd`.
pub fn truncate_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }

    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

const APT_SUFFIXES: [&str; 4] = [".apt", ".ap", ".a", "."];

/// Strips a full or partially typed `.apt` name suffix, `name.ap` becomes `name`.
pub fn truncate_apt_suffix(name: &str) -> &str {
    APT_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}
