use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Fee tiers offered to the payer
///
/// Adding a tier means adding a row to the percentage and multiplier tables
/// in `engine`; both are indexed by [`FeeTier::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeeTier {
    #[value(alias = "fastestFee")]
    Priority,
    #[value(alias = "hourFee")]
    Standard,
    #[value(alias = "economyFee")]
    Economy,
}

impl FeeTier {
    /// Every tier, in table order
    pub const ALL: [FeeTier; 3] = [FeeTier::Priority, FeeTier::Standard, FeeTier::Economy];

    /// Row index into the per-tier constant tables
    pub const fn index(self) -> usize {
        match self {
            FeeTier::Priority => 0,
            FeeTier::Standard => 1,
            FeeTier::Economy => 2,
        }
    }

    /// Human-readable display name used in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            FeeTier::Priority => "Priority",
            FeeTier::Standard => "Standard",
            FeeTier::Economy => "Economy",
        }
    }

    /// Economy payments are assumed to settle inside a batch transaction
    pub fn is_batched(&self) -> bool {
        matches!(self, FeeTier::Economy)
    }
}

impl std::fmt::Display for FeeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for FeeTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Priority" | "priority" | "fastestFee" => Ok(FeeTier::Priority),
            "Standard" | "standard" | "hourFee" => Ok(FeeTier::Standard),
            "Economy" | "economy" | "economyFee" => Ok(FeeTier::Economy),
            _ => Err(format!("Unknown fee tier: {}", s)),
        }
    }
}
