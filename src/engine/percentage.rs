//! Percentage-of-amount fee component
//!
//! Small payments pay a high percentage that decays exponentially as the
//! amount grows. From 4M sats on the curve switches to `cap_divisor / amount`,
//! which keeps the absolute percentage fee flat for large payments. The decayed
//! value is then pulled linearly toward a per-tier floor as congestion rises
//! from 1 to 2000 sat/vB.

use crate::types::FeeTier;

/// Amount (sats) at which the exponential curve hands over to the inverse tail
pub const DECAY_CUTOFF_SATS: u64 = 4_000_000;

/// Amount (sats) at which the curve sits exactly on `max_rate`
pub const DECAY_ORIGIN_SATS: u64 = 21_000;

/// Decay exponent across [`DECAY_ORIGIN_SATS`, `DECAY_CUTOFF_SATS`)
pub const DECAY_STEEPNESS: f64 = 21.0;

/// Congestion rate at which the blend is pure decay (sat/vB)
pub const BLEND_RATE_LOW: f64 = 1.0;

/// Congestion rate at which the blend reaches the tier floor (sat/vB)
pub const BLEND_RATE_HIGH: f64 = 2000.0;

/// Per-tier percentage curve constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageCurve {
    /// Asymptote of the decay below the cutoff
    pub min_rate: f64,
    /// Percentage at `DECAY_ORIGIN_SATS`
    pub max_rate: f64,
    /// Flat percentage fee (sats) above the cutoff
    pub cap_divisor: f64,
    /// Percentage the blend converges to at `BLEND_RATE_HIGH`
    pub congestion_floor: f64,
}

/// Curve table indexed by [`FeeTier::index`]
pub static PERCENTAGE_CURVES: [PercentageCurve; 3] = [
    // Priority: 4% down to 0.75%, 30000 sats above the cutoff
    PercentageCurve {
        min_rate: 0.0075,
        max_rate: 0.04,
        cap_divisor: 30_000.0,
        congestion_floor: 0.005,
    },
    // Standard: 3% down to 0.5%, 20000 sats above the cutoff
    PercentageCurve {
        min_rate: 0.005,
        max_rate: 0.03,
        cap_divisor: 20_000.0,
        congestion_floor: 0.0025,
    },
    // Economy: 2% down to 0.3125%, 12500 sats above the cutoff
    PercentageCurve {
        min_rate: 0.003125,
        max_rate: 0.02,
        cap_divisor: 12_500.0,
        congestion_floor: 0.001,
    },
];

impl PercentageCurve {
    pub fn for_tier(tier: FeeTier) -> &'static PercentageCurve {
        &PERCENTAGE_CURVES[tier.index()]
    }
}

/// Exponential decay below the cutoff, inverse-proportional tail above it
///
/// Amounts below `DECAY_ORIGIN_SATS` extrapolate the curve above `max_rate`.
pub fn exp_decay(amount_sats: u64, min_rate: f64, max_rate: f64, cap_divisor: f64) -> f64 {
    if amount_sats < DECAY_CUTOFF_SATS {
        let span = (DECAY_CUTOFF_SATS - DECAY_ORIGIN_SATS) as f64;
        let progress = (amount_sats as f64 - DECAY_ORIGIN_SATS as f64) / span;
        min_rate + (max_rate - min_rate) * (-progress * DECAY_STEEPNESS).exp()
    } else {
        cap_divisor / amount_sats as f64
    }
}

/// Fraction of the amount charged as the percentage component
///
/// Returns 0 for a zero amount. `congestion_rate` is expected to be positive;
/// the engine rejects anything else before calling this.
///
/// The blend weight is not clamped. Above 2000 sat/vB the result overshoots
/// the congestion floor and, for amounts whose decay sits above the floor,
/// goes negative; the network cost term then carries the fee.
pub fn fee_percentage(amount_sats: u64, tier: FeeTier, congestion_rate: f64) -> f64 {
    if amount_sats == 0 {
        return 0.0;
    }

    let curve = PercentageCurve::for_tier(tier);
    let decay = exp_decay(
        amount_sats,
        curve.min_rate,
        curve.max_rate,
        curve.cap_divisor,
    );
    let weight = (congestion_rate - BLEND_RATE_LOW) / (BLEND_RATE_HIGH - BLEND_RATE_LOW);

    decay + weight * (curve.congestion_floor - decay)
}
