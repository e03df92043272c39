//! Fee computation engine
//!
//! Pure pipeline from {amount, tier, congestion} to a [`FeeQuote`]:
//! - **size** - assumed transaction shape and virtual size
//! - **scale** - congestion simulator slider mapping
//! - **percentage** - percentage-of-amount component
//! - **multiplier** - network-cost weighting
//! - **network_cost** - on-chain cost of settling the payment
//!
//! The engine holds no state and performs no I/O. Every tier reads its
//! congestion from `snapshot.fastest` unless the request carries an override.

pub mod multiplier;
pub mod network_cost;
pub mod percentage;
pub mod scale;
pub mod size;

use crate::errors::{FeeError, FeeResult};
use network_cost::sats_from_f64;
use crate::types::{FeeQuote, FeeRateSnapshot, FeeRequest, FeeTier};
use tracing::debug;

pub use multiplier::base_multiplier;
pub use network_cost::network_cost;
pub use percentage::{exp_decay, fee_percentage};
pub use scale::{rate_from_slider_position, slider_position_from_rate};
pub use size::{batch_input_count, input_count, transaction_size, TransactionShape};

/// Smallest payment the engine will quote (sats)
pub const MIN_AMOUNT_SATS: u64 = 10_000;

/// Largest payment the engine will quote (sats), 1 BTC
pub const MAX_AMOUNT_SATS: u64 = 100_000_000;

/// Satoshis per Bitcoin
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Fee quoting entry point
pub struct FeeEngine;

impl FeeEngine {
    /// Quote the fee for `request`
    ///
    /// The congestion rate is `request.congestion_override` if set, otherwise
    /// `snapshot.fastest`. A snapshot is only required when there is no
    /// override.
    ///
    /// # Errors
    /// * `InvalidAmount` - amount outside [`MIN_AMOUNT_SATS`, `MAX_AMOUNT_SATS`]
    /// * `MissingSnapshot` - no override and no snapshot
    /// * `InvalidCongestion` - congestion rate not finite or not > 0, or so
    ///   large that the network cost or fee no longer fits in whole sats
    pub fn quote(request: &FeeRequest, snapshot: Option<&FeeRateSnapshot>) -> FeeResult<FeeQuote> {
        Self::validate_amount(request.amount_sats)?;
        let (field, congestion) = Self::congestion_source(request, snapshot)?;
        Self::price(request.amount_sats, request.tier, congestion)
            .ok_or(FeeError::InvalidCongestion {
                field,
                rate: congestion,
            })
    }

    /// Quote every tier for the same amount and congestion source
    pub fn quote_all_tiers(
        amount_sats: u64,
        congestion_override: Option<f64>,
        snapshot: Option<&FeeRateSnapshot>,
    ) -> FeeResult<Vec<(FeeTier, FeeQuote)>> {
        FeeTier::ALL
            .iter()
            .map(|&tier| {
                let request = FeeRequest {
                    amount_sats,
                    tier,
                    congestion_override,
                };
                Self::quote(&request, snapshot).map(|quote| (tier, quote))
            })
            .collect()
    }

    /// Reject amounts outside the quotable range
    pub fn validate_amount(amount_sats: u64) -> FeeResult<()> {
        if !(MIN_AMOUNT_SATS..=MAX_AMOUNT_SATS).contains(&amount_sats) {
            return Err(FeeError::InvalidAmount {
                amount_sats,
                min: MIN_AMOUNT_SATS,
                max: MAX_AMOUNT_SATS,
            });
        }
        Ok(())
    }

    /// Congestion rate the formulas will read for this request
    pub fn effective_congestion(
        request: &FeeRequest,
        snapshot: Option<&FeeRateSnapshot>,
    ) -> FeeResult<f64> {
        Self::congestion_source(request, snapshot).map(|(_, rate)| rate)
    }

    /// Effective congestion rate and the field it was read from
    fn congestion_source(
        request: &FeeRequest,
        snapshot: Option<&FeeRateSnapshot>,
    ) -> FeeResult<(&'static str, f64)> {
        let (field, rate) = match (request.congestion_override, snapshot) {
            (Some(rate), _) => ("congestion_override", rate),
            (None, Some(snapshot)) => ("snapshot.fastest", snapshot.fastest),
            (None, None) => return Err(FeeError::MissingSnapshot),
        };

        if !rate.is_finite() || rate <= 0.0 {
            return Err(FeeError::InvalidCongestion { field, rate });
        }
        Ok((field, rate))
    }

    /// Run the pipeline on already-validated inputs
    ///
    /// `None` when a component or the final fee is not representable in
    /// whole sats, which only happens at absurd congestion rates.
    fn price(amount_sats: u64, tier: FeeTier, congestion: f64) -> Option<FeeQuote> {
        let transaction_size_vbytes = TransactionShape::for_payment(amount_sats, tier).vbytes();
        let fee_percentage = fee_percentage(amount_sats, tier, congestion);
        let base_multiplier = base_multiplier(tier, congestion);
        let network_cost_sats = network_cost(amount_sats, tier, congestion)?;

        let fee = amount_sats as f64 * fee_percentage + network_cost_sats as f64 * base_multiplier;
        let fee_sats = sats_from_f64(fee.round())?;

        debug!(
            amount_sats,
            %tier,
            congestion,
            transaction_size_vbytes,
            fee_percentage,
            base_multiplier,
            network_cost_sats,
            fee_sats,
            "Priced payment"
        );

        Some(FeeQuote {
            fee_sats,
            fee_btc: fee_sats as f64 / SATS_PER_BTC,
            transaction_size_vbytes,
            fee_percentage,
            base_multiplier,
            network_cost_sats,
        })
    }
}
