//! On-chain cost of settling one payment
//!
//! Priority and Standard payments carry a whole transaction. Economy payments
//! share a batch transaction with nine others, so one tenth of the batch cost
//! is charged.

use super::size::TransactionShape;
use crate::types::FeeTier;

/// Payments assumed to share one Economy batch
pub const BATCH_PAYMENT_COUNT: u64 = 10;

/// Network cost in sats for settling `amount_sats` at `tier`
///
/// The result is rounded to whole sats. With an integral congestion rate the
/// regular-tier cost is exact. Returns `None` when the rounded cost is not a
/// finite, non-negative value that fits in a `u64`.
pub fn network_cost(amount_sats: u64, tier: FeeTier, congestion_rate: f64) -> Option<u64> {
    let size = TransactionShape::for_payment(amount_sats, tier).vbytes() as f64;

    let cost = if tier.is_batched() {
        size * congestion_rate / BATCH_PAYMENT_COUNT as f64
    } else {
        size * congestion_rate
    };

    sats_from_f64(cost.round())
}

/// Whole sats from an already-rounded value, without saturating
pub(crate) fn sats_from_f64(value: f64) -> Option<u64> {
    // 2^64 is the first f64 above u64::MAX
    if value.is_finite() && value >= 0.0 && value < 18_446_744_073_709_551_616.0 {
        Some(value as u64)
    } else {
        None
    }
}
