//! Worked fee scenarios
//!
//! Input-count buckets are half-open: an amount equal to a threshold belongs
//! to the higher bucket (10,000,000 sats needs 4 regular / 6 batch inputs).

use tiered_fee_calculator::engine::{batch_input_count, input_count, network_cost, FeeEngine};
use tiered_fee_calculator::{FeeError, FeeRequest, FeeTier};

use crate::common::{assert_close, fallback_snapshot, snapshot_with_fastest};

#[test]
fn test_priority_one_million_at_fifty() {
    let request = FeeRequest::new(1_000_000, FeeTier::Priority);
    let quote = FeeEngine::quote(&request, Some(&snapshot_with_fastest(50.0))).unwrap();

    assert_eq!(input_count(1_000_000), 2);
    assert_eq!(quote.transaction_size_vbytes, 11 + 136 + 62);
    assert_eq!(quote.network_cost_sats, 209 * 50);
    assert_close(quote.base_multiplier, 1.34, 1e-12);

    let decay = 0.0075 + (0.04 - 0.0075) * (-(979_000.0_f64 / 3_979_000.0) * 21.0).exp();
    let percentage = decay + (49.0 / 1999.0) * (0.005 - decay);
    assert_close(quote.fee_percentage, percentage, 1e-15);

    let expected = (1_000_000.0 * percentage + 10_450.0 * (2.0 / 50.0 + 1.3)).round() as u64;
    assert_eq!(quote.fee_sats, expected);
    // about 7,620 sats percentage plus 14,003 sats network
    assert!((21_600..21_650).contains(&quote.fee_sats));
}

#[test]
fn test_below_minimum_amount() {
    let request = FeeRequest::new(5_000, FeeTier::Priority);
    assert_eq!(
        FeeEngine::quote(&request, Some(&fallback_snapshot())),
        Err(FeeError::InvalidAmount {
            amount_sats: 5_000,
            min: 10_000,
            max: 100_000_000,
        })
    );
}

#[test]
fn test_above_maximum_amount() {
    let request = FeeRequest::new(100_000_001, FeeTier::Economy);
    assert!(matches!(
        FeeEngine::quote(&request, Some(&fallback_snapshot())),
        Err(FeeError::InvalidAmount {
            amount_sats: 100_000_001,
            ..
        })
    ));
}

#[test]
fn test_economy_five_input_batch_at_twenty() {
    let amount = 9_999_999;
    let request = FeeRequest::new(amount, FeeTier::Economy);
    let quote = FeeEngine::quote(&request, Some(&snapshot_with_fastest(20.0))).unwrap();

    assert_eq!(batch_input_count(amount), 5);
    assert_eq!(quote.transaction_size_vbytes, 11 + 340 + 341);
    assert_eq!(quote.network_cost_sats, 1_384);
    assert_close(quote.base_multiplier, 1.2, 1e-12);
}

#[test]
fn test_economy_ten_million_at_twenty() {
    let request = FeeRequest::new(10_000_000, FeeTier::Economy);
    let quote = FeeEngine::quote(&request, Some(&snapshot_with_fastest(20.0))).unwrap();

    assert_eq!(batch_input_count(10_000_000), 6);
    assert_eq!(quote.transaction_size_vbytes, 760);
    assert_eq!(quote.network_cost_sats, 1_520);
    assert_close(quote.base_multiplier, 1.2, 1e-12);

    // Above the cutoff the decay is 12500 / amount
    let percentage = 0.00125 + (19.0 / 1999.0) * (0.001 - 0.00125);
    assert_close(quote.fee_percentage, percentage, 1e-15);
    assert_eq!(
        quote.fee_sats,
        (10_000_000.0 * percentage + 1_520.0 * (2.0 / 20.0 + 1.1)).round() as u64
    );
}

#[test]
fn test_standard_at_fallback_rates() {
    let request = FeeRequest::new(250_000, FeeTier::Standard);
    let quote = FeeEngine::quote(&request, Some(&fallback_snapshot())).unwrap();

    assert_eq!(quote.transaction_size_vbytes, 141);
    assert_eq!(quote.network_cost_sats, 7_050);
    assert_close(quote.base_multiplier, 1.12, 1e-12);
}

#[test]
fn test_simulated_rate_matches_snapshot_rate() {
    let simulated = FeeRequest::new(3_000_000, FeeTier::Priority).with_congestion_override(2000.0);
    let from_override = FeeEngine::quote(&simulated, Some(&fallback_snapshot())).unwrap();
    let from_snapshot = FeeEngine::quote(
        &FeeRequest::new(3_000_000, FeeTier::Priority),
        Some(&snapshot_with_fastest(2000.0)),
    )
    .unwrap();

    assert_eq!(from_override, from_snapshot);
    assert_close(from_override.fee_percentage, 0.005, 1e-12);
    assert_eq!(
        Some(from_override.network_cost_sats),
        network_cost(3_000_000, FeeTier::Priority, 2000.0)
    );
}

#[test]
fn test_zero_congestion_fails_fast() {
    let request = FeeRequest::new(1_000_000, FeeTier::Standard).with_congestion_override(0.0);
    assert!(matches!(
        FeeEngine::quote(&request, Some(&fallback_snapshot())),
        Err(FeeError::InvalidCongestion { rate, .. }) if rate == 0.0
    ));
}

#[test]
fn test_absurd_congestion_is_an_error_not_a_zero_fee() {
    for tier in FeeTier::ALL {
        let request = FeeRequest::new(10_000, tier).with_congestion_override(1e300);
        assert_eq!(
            FeeEngine::quote(&request, Some(&fallback_snapshot())),
            Err(FeeError::InvalidCongestion {
                field: "congestion_override",
                rate: 1e300,
            })
        );
        assert_eq!(network_cost(10_000, tier, 1e300), None);
    }
}

#[test]
fn test_five_thousand_sat_per_vbyte_priority() {
    let request = FeeRequest::new(10_000, FeeTier::Priority).with_congestion_override(5000.0);
    let quote = FeeEngine::quote(&request, None).unwrap();

    // Weight 4999/1999 overshoots the floor; the percentage turns negative
    assert!(quote.fee_percentage < -0.05 && quote.fee_percentage > -0.051);
    assert_eq!(quote.network_cost_sats, 141 * 5000);
    assert!(quote.fee_sats > quote.network_cost_sats);
}
