//! Amount and address formatting for display.
//!
//! Amounts travel as base units (18 decimals). The dashboard shows them in
//! the display unit with exactly four fractional digits, rounding half up.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use alloy_primitives::{Address, U256};

use crate::error::ContractError;

/// Base units per smallest displayed step (10^18 / 10^4).
const WEI_PER_DISPLAY_STEP: u64 = 100_000_000_000_000;
const DISPLAY_STEPS_PER_UNIT: u64 = 10_000;

/// Format base units as a display-unit decimal with four fractional digits.
///
/// `1_000_000_000_000_000_000` formats as `"1.0000"`.
#[must_use]
pub fn format_ether(wei: U256) -> String {
    let step = U256::from(WEI_PER_DISPLAY_STEP);
    let steps = wei.saturating_add(step / U256::from(2u8)) / step;
    let per_unit = U256::from(DISPLAY_STEPS_PER_UNIT);
    let whole = steps / per_unit;
    let frac = u64::try_from(steps % per_unit).unwrap_or_default();
    format!("{whole}.{frac:04}")
}

/// Parse a user-entered display-unit decimal (e.g. `"0.01"`) into base units.
///
/// # Errors
///
/// Returns [`ContractError::InvalidAmount`] for blank input, negative values,
/// anything other than digits and a single `.`, or more than 18 fractional
/// digits.
pub fn parse_ether(input: &str) -> Result<U256, ContractError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ContractError::InvalidAmount { input: input.to_owned(), reason: "empty".to_owned() });
    }
    if trimmed.starts_with('-') {
        return Err(ContractError::InvalidAmount { input: input.to_owned(), reason: "negative".to_owned() });
    }
    if trimmed.matches('.').count() > 1 || !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(ContractError::InvalidAmount { input: input.to_owned(), reason: "not a decimal number".to_owned() });
    }
    if trimmed.split_once('.').is_some_and(|(_, frac)| frac.len() > 18) {
        return Err(ContractError::InvalidAmount { input: input.to_owned(), reason: "too many decimals".to_owned() });
    }
    alloy_primitives::utils::parse_ether(trimmed)
        .map_err(|e| ContractError::InvalidAmount { input: input.to_owned(), reason: e.to_string() })
}

/// Render an address as `0x1234...abcd`, keeping `head` leading and `tail`
/// trailing characters of its checksummed text.
#[must_use]
pub fn short_address(address: &Address, head: usize, tail: usize) -> String {
    let text = address.to_string();
    if head + tail >= text.len() {
        return text;
    }
    format!("{}...{}", &text[..head], &text[text.len() - tail..])
}

/// Parse an address from hex text without enforcing checksum casing.
#[must_use]
pub fn parse_address(input: &str) -> Option<Address> {
    input.trim().parse::<Address>().ok()
}
