//! Fee Calculator - Type System
//!
//! - `fee_rates`: Recommended fee-rate snapshot as published by the mempool feed
//! - `tier`: Fee tiers (Priority, Standard, Economy)
//! - `quote`: Fee request and the quote produced for it

pub mod fee_rates;
pub mod quote;
pub mod tier;

pub use fee_rates::{FeeRateSnapshot, SnapshotSource};
pub use quote::{FeeQuote, FeeRequest};
pub use tier::FeeTier;
