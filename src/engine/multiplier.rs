//! Network-cost weighting
//!
//! `multiplier = numerator / congestion_rate + floor`. The weight falls toward
//! the tier floor as congestion rises and grows without bound as congestion
//! approaches zero, so callers must reject non-positive rates first.

use crate::types::FeeTier;

/// Per-tier multiplier constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierParams {
    pub numerator: f64,
    pub floor: f64,
}

/// Multiplier table indexed by [`FeeTier::index`]
pub static MULTIPLIER_PARAMS: [MultiplierParams; 3] = [
    MultiplierParams {
        numerator: 2.0,
        floor: 1.3,
    }, // Priority
    MultiplierParams {
        numerator: 1.0,
        floor: 1.1,
    }, // Standard
    MultiplierParams {
        numerator: 2.0,
        floor: 1.1,
    }, // Economy
];

impl MultiplierParams {
    pub fn for_tier(tier: FeeTier) -> &'static MultiplierParams {
        &MULTIPLIER_PARAMS[tier.index()]
    }
}

/// Weight applied to the network-cost term
///
/// # Examples
/// ```
/// use tiered_fee_calculator::engine::multiplier::base_multiplier;
/// use tiered_fee_calculator::types::FeeTier;
///
/// assert!((base_multiplier(FeeTier::Priority, 50.0) - 1.34).abs() < 1e-12);
/// assert!((base_multiplier(FeeTier::Economy, 20.0) - 1.2).abs() < 1e-12);
/// ```
pub fn base_multiplier(tier: FeeTier, congestion_rate: f64) -> f64 {
    let params = MultiplierParams::for_tier(tier);
    params.numerator / congestion_rate + params.floor
}
