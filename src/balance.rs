//! Fixed-point formatting of on-chain integer balances, e.g. octas to APT.

use thiserror::Error;

use crate::units::APT_DECIMALS;

pub const APT_CURRENCY_CODE: &str = "APT";

/// Coin decimals are a `u8` on chain.
pub const MAX_DECIMALS: u32 = u8::MAX as u32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceFormatError {
    #[error("invalid balance format {0:?}, expected a string of decimal digits")]
    InvalidBalanceFormat(String),
    #[error("decimals {0} out of range, coins have at most 255")]
    DecimalsOutOfRange(u32),
}

fn trim_right(digits: &str) -> &str {
    digits.trim_end_matches('0')
}

// en-US grouping, 1234567 -> 1,234,567.
fn group_thousands(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats `balance`, an amount in the smallest unit of an asset with `decimals` fractional
/// digits, as a human readable decimal string. Trailing fractional zeros are dropped and the
/// whole part is grouped by thousands. When `fixed_decimal_places` is given, fractional digits
/// past that many are cut off, not rounded.
///
/// ```
/// use aptos_explorer::balance::format_balance;
///
/// assert_eq!(format_balance("123456789000", 8, None).unwrap(), "1,234.56789");
/// assert_eq!(format_balance("123456789000", 8, Some(2)).unwrap(), "1,234.56");
/// ```
pub fn format_balance(
    balance: &str,
    decimals: u32,
    fixed_decimal_places: Option<usize>,
) -> Result<String, BalanceFormatError> {
    if balance.is_empty() || !balance.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(BalanceFormatError::InvalidBalanceFormat(balance.to_string()));
    }

    if balance == "0" || decimals == 0 {
        return Ok(balance.to_string());
    }

    if decimals > MAX_DECIMALS {
        return Err(BalanceFormatError::DecimalsOutOfRange(decimals));
    }

    let decimals = decimals as usize;
    let len = balance.len();

    if len <= decimals {
        let right = trim_right(balance);
        return Ok(if right.is_empty() {
            "0".to_string()
        } else {
            format!("0.{}{right}", "0".repeat(decimals - len))
        });
    }

    let (left, right) = balance.split_at(len - decimals);
    let left = group_thousands(left);

    if right.bytes().all(|byte| byte == b'0') {
        return Ok(left);
    }

    let mut right = trim_right(right);
    if let Some(places) = fixed_decimal_places {
        if right.len() > places {
            right = &right[..places];
        }
    }
    let right = trim_right(right);

    if right.is_empty() || right == "0" {
        Ok(left)
    } else {
        Ok(format!("{left}.{right}"))
    }
}

/// Formats a possibly negative amount with a currency code suffix, e.g. `-150000000` becomes
/// `1.5 APT`. The sign is dropped, callers render it themselves.
pub fn format_currency_value(
    amount: &str,
    currency_code: &str,
    decimals: u32,
    fixed_decimal_places: Option<usize>,
) -> Result<String, BalanceFormatError> {
    let magnitude = amount.strip_prefix('-').unwrap_or(amount);
    let formatted = format_balance(magnitude, decimals, fixed_decimal_places)?;
    Ok(format!("{formatted} {currency_code}"))
}

pub fn format_apt_value(
    amount: &str,
    fixed_decimal_places: Option<usize>,
) -> Result<String, BalanceFormatError> {
    format_currency_value(amount, APT_CURRENCY_CODE, APT_DECIMALS, fixed_decimal_places)
}
