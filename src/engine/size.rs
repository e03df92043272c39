//! Transaction size estimation
//!
//! Maps a payment amount to an assumed P2WPKH transaction shape. Input counts
//! are empirical step functions: larger payments tend to consume more UTXOs.
//! Economy payments are priced as one slot in a batch transaction.

use crate::types::FeeTier;
use serde::{Deserialize, Serialize};

/// Serialised size of the transaction envelope (version, locktime, counts, segwit marker)
pub const BASE_SIZE_VBYTES: u64 = 11;

/// One P2WPKH input
pub const P2WPKH_INPUT_VBYTES: u64 = 68;

/// One P2WPKH output
pub const P2WPKH_OUTPUT_VBYTES: u64 = 31;

/// Payment plus change
pub const REGULAR_OUTPUTS: u32 = 2;

/// Ten batched payments plus one change output
pub const BATCH_OUTPUTS: u32 = 11;

/// Extra inputs a batch is assumed to need over a single payment
pub const BATCH_INPUT_OFFSET: u32 = 2;

/// Amount thresholds (sats) at which one more input is assumed.
/// Each entry adds an input once `amount >= threshold`.
pub const INPUT_COUNT_THRESHOLDS: &[u64] = &[
    1,          // [1, 500k) - 1 input
    500_000,    // [500k, 3M) - 2 inputs
    3_000_000,  // [3M, 10M) - 3 inputs
    10_000_000, // [10M, 22M) - 4 inputs
    22_000_000, // [22M, 70M) - 5 inputs
    70_000_000, // [70M, ∞) - 6 inputs
];

/// Number of inputs assumed for a regular (Priority/Standard) payment
///
/// # Examples
/// ```
/// use tiered_fee_calculator::engine::size::input_count;
///
/// assert_eq!(input_count(0), 0);
/// assert_eq!(input_count(499_999), 1);
/// assert_eq!(input_count(500_000), 2);
/// assert_eq!(input_count(100_000_000), 6);
/// ```
pub fn input_count(amount_sats: u64) -> u32 {
    INPUT_COUNT_THRESHOLDS
        .iter()
        .take_while(|&&threshold| amount_sats >= threshold)
        .count() as u32
}

/// Number of inputs assumed for the batch an Economy payment settles in
///
/// Returns 3..=8. A zero amount still prices the smallest batch.
pub fn batch_input_count(amount_sats: u64) -> u32 {
    input_count(amount_sats).max(1) + BATCH_INPUT_OFFSET
}

/// Virtual size of a transaction with `num_inputs` P2WPKH inputs and
/// `num_outputs` P2WPKH outputs
///
/// # Examples
/// ```
/// use tiered_fee_calculator::engine::size::transaction_size;
///
/// assert_eq!(transaction_size(1, 2), 141);
/// assert_eq!(transaction_size(5, 11), 692);
/// ```
pub fn transaction_size(num_inputs: u32, num_outputs: u32) -> u64 {
    BASE_SIZE_VBYTES
        + P2WPKH_INPUT_VBYTES * u64::from(num_inputs)
        + P2WPKH_OUTPUT_VBYTES * u64::from(num_outputs)
}

/// Assumed input/output counts for one priced payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionShape {
    pub inputs: u32,
    pub outputs: u32,
}

impl TransactionShape {
    /// Shape used to price `amount_sats` at `tier`
    pub fn for_payment(amount_sats: u64, tier: FeeTier) -> Self {
        if tier.is_batched() {
            Self {
                inputs: batch_input_count(amount_sats),
                outputs: BATCH_OUTPUTS,
            }
        } else {
            Self {
                inputs: input_count(amount_sats),
                outputs: REGULAR_OUTPUTS,
            }
        }
    }

    pub fn vbytes(&self) -> u64 {
        transaction_size(self.inputs, self.outputs)
    }
}
