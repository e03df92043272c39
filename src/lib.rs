//! Tiered Bitcoin Payment Fee Calculator
//!
//! Deterministic fee quotes for Bitcoin payments from a mempool fee-rate
//! snapshot and a Priority/Standard/Economy tier. [`engine::FeeEngine`] is the
//! pure core; `feeds`, `report` and `cli` are the collaborators around it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod feeds;
pub mod report;
pub mod types;
pub mod utils;

pub use engine::FeeEngine;
pub use errors::{AppError, AppResult, FeeError, FeeResult};
pub use types::{FeeQuote, FeeRateSnapshot, FeeRequest, FeeTier};
