//! Fee-rate snapshot types
//!
//! A snapshot is immutable once built. A refresh produces a new snapshot that
//! supersedes the old one rather than mutating it.

use crate::errors::{FeeError, FeeResult};
use serde::{Deserialize, Serialize};

/// Recommended fee rates in sat/vB
///
/// Field names on the wire follow the mempool.space `/fees/recommended` schema
/// (`fastestFee`, `halfHourFee`, ...). No ordering between the rates is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeRateSnapshot {
    #[serde(rename = "fastestFee")]
    pub fastest: f64,
    #[serde(rename = "halfHourFee")]
    pub half_hour: f64,
    #[serde(rename = "hourFee")]
    pub hour: f64,
    #[serde(rename = "economyFee")]
    pub economy: f64,
    #[serde(rename = "minimumFee")]
    pub minimum: f64,
}

impl FeeRateSnapshot {
    /// Build a snapshot, rejecting any rate that is not finite and > 0
    pub fn new(fastest: f64, half_hour: f64, hour: f64, economy: f64, minimum: f64) -> FeeResult<Self> {
        let snapshot = Self {
            fastest,
            half_hour,
            hour,
            economy,
            minimum,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check every field is a finite positive rate
    ///
    /// Deserialised snapshots bypass `new`, so feed code calls this explicitly.
    pub fn validate(&self) -> FeeResult<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value <= 0.0 {
                return Err(FeeError::InvalidSnapshot { field, value });
            }
        }
        Ok(())
    }

    /// Named fields in wire order
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("fastestFee", self.fastest),
            ("halfHourFee", self.half_hour),
            ("hourFee", self.hour),
            ("economyFee", self.economy),
            ("minimumFee", self.minimum),
        ]
    }

    /// Copy of this snapshot with `fastest` replaced
    pub fn with_fastest(&self, fastest: f64) -> Self {
        Self { fastest, ..*self }
    }
}

/// Where a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    /// Fetched from the live feed
    Live,
    /// Configured fallback after the feed was exhausted
    Fallback,
    /// Supplied by the caller (CLI flags, tests)
    Manual,
}

impl std::fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSource::Live => write!(f, "live"),
            SnapshotSource::Fallback => write!(f, "fallback"),
            SnapshotSource::Manual => write!(f, "manual"),
        }
    }
}
