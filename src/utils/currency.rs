//! Currency conversion and formatting for Bitcoin and satoshi values
//!
//! Presentation helpers only: the engine works in whole satoshis and never
//! touches fiat prices.

use crate::engine::SATS_PER_BTC;
use crate::errors::{FeeError, FeeResult};
use bitcoin::{Amount, Denomination};

/// Parse a BTC-denominated string into whole satoshis
///
/// Rejects negative values and anything finer than one satoshi.
///
/// # Examples
/// ```
/// use tiered_fee_calculator::utils::currency::parse_btc_amount;
///
/// assert_eq!(parse_btc_amount("0.01").unwrap(), 1_000_000);
/// assert_eq!(parse_btc_amount("1").unwrap(), 100_000_000);
/// assert!(parse_btc_amount("0.000000001").is_err());
/// ```
pub fn parse_btc_amount(input: &str) -> FeeResult<u64> {
    Amount::from_str_in(input.trim(), Denomination::Bitcoin)
        .map(|amount| amount.to_sat())
        .map_err(|e| FeeError::InvalidBtcAmount(format!("{:?}: {}", input, e)))
}

/// Convert satoshis to BTC
pub fn sats_to_btc(sats: u64) -> f64 {
    Amount::from_sat(sats).to_btc()
}

/// Fiat value of a BTC amount at `spot_price` (fiat units per BTC)
pub fn fee_in_fiat(fee_btc: f64, spot_price: f64) -> f64 {
    fee_btc * spot_price
}

/// Format a satoshi amount as dual BTC + sats display
///
/// # Examples
/// ```
/// use tiered_fee_calculator::utils::currency::format_sats_as_btc;
///
/// assert_eq!(format_sats_as_btc(21_622), "0.00021622 BTC (21622 sats)");
/// ```
pub fn format_sats_as_btc(sats: u64) -> String {
    format!("{:.8} BTC ({} sats)", sats as f64 / SATS_PER_BTC, sats)
}

/// Format a fraction (0.0125) as a percentage string ("1.2500%")
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.4}%", fraction * 100.0)
}

/// Format a US dollar value with cents
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}
