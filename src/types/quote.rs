use super::FeeTier;
use serde::{Deserialize, Serialize};

/// A request for a fee quote
///
/// `congestion_override` substitutes for `snapshot.fastest` in every formula
/// that reads congestion. The snapshot itself is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRequest {
    pub amount_sats: u64,
    pub tier: FeeTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion_override: Option<f64>,
}

impl FeeRequest {
    pub fn new(amount_sats: u64, tier: FeeTier) -> Self {
        Self {
            amount_sats,
            tier,
            congestion_override: None,
        }
    }

    /// Same request priced at a simulated congestion rate
    pub fn with_congestion_override(self, rate: f64) -> Self {
        Self {
            congestion_override: Some(rate),
            ..self
        }
    }
}

/// Fee quote produced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    pub fee_sats: u64,
    pub fee_btc: f64,
    pub transaction_size_vbytes: u64,
    /// Fraction of the amount (0.01 = 1%)
    pub fee_percentage: f64,
    pub base_multiplier: f64,
    pub network_cost_sats: u64,
}
