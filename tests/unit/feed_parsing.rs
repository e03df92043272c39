//! Fee-rate and price payload parsing

use tiered_fee_calculator::errors::FeedError;
use tiered_fee_calculator::feeds::{
    latest_price_usd, parse_price_response, parse_snapshot, PriceEntry, PriceListItem,
};

use crate::common::assert_close;

const RECOMMENDED_FEES: &str =
    r#"{"fastestFee":51,"halfHourFee":44,"hourFee":38,"economyFee":20,"minimumFee":10}"#;

fn usd_cents(base: f64, offset: i32) -> PriceEntry {
    PriceEntry {
        base,
        offset,
        currency_unit: "USDCENT".to_string(),
        formatted_amount: String::new(),
    }
}

#[test]
fn test_parse_recommended_fees() {
    let snapshot = parse_snapshot(RECOMMENDED_FEES).unwrap();
    assert_eq!(snapshot.fastest, 51.0);
    assert_eq!(snapshot.half_hour, 44.0);
    assert_eq!(snapshot.hour, 38.0);
    assert_eq!(snapshot.economy, 20.0);
    assert_eq!(snapshot.minimum, 10.0);
}

#[test]
fn test_parse_fractional_rates() {
    let body = r#"{"fastestFee":2.5,"halfHourFee":2.1,"hourFee":1.8,"economyFee":1.2,"minimumFee":1.01}"#;
    let snapshot = parse_snapshot(body).unwrap();
    assert_eq!(snapshot.fastest, 2.5);
    assert_eq!(snapshot.minimum, 1.01);
}

#[test]
fn test_parse_ignores_unknown_fields() {
    let body = r#"{"fastestFee":12,"halfHourFee":10,"hourFee":8,"economyFee":4,"minimumFee":2,"extra":true}"#;
    assert_eq!(parse_snapshot(body).unwrap().fastest, 12.0);
}

#[test]
fn test_parse_rejects_missing_field() {
    let body = r#"{"fastestFee":12,"halfHourFee":10,"hourFee":8,"economyFee":4}"#;
    assert!(matches!(
        parse_snapshot(body),
        Err(FeedError::InvalidResponse(_))
    ));
}

#[test]
fn test_parse_rejects_zero_rate() {
    let body = r#"{"fastestFee":0,"halfHourFee":10,"hourFee":8,"economyFee":4,"minimumFee":2}"#;
    match parse_snapshot(body) {
        Err(FeedError::InvalidResponse(message)) => assert!(message.contains("fastestFee")),
        other => panic!("expected InvalidResponse, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_non_json() {
    assert!(parse_snapshot("<html>502 Bad Gateway</html>").is_err());
}

#[test]
fn test_price_entry_to_usd() {
    assert_close(usd_cents(6_500_000_000_000.0, 6).to_usd(), 65_000.0, 1e-9);
    assert_close(usd_cents(6_500_000.0, 0).to_usd(), 65_000.0, 1e-9);
}

#[test]
fn test_latest_price_uses_newest_timestamp() {
    let items = vec![
        PriceListItem {
            timestamp: 1_700_000_300,
            price: usd_cents(6_600_000.0, 0),
        },
        PriceListItem {
            timestamp: 1_700_000_900,
            price: usd_cents(6_700_000.0, 0),
        },
        PriceListItem {
            timestamp: 1_700_000_600,
            price: usd_cents(6_800_000.0, 0),
        },
    ];
    assert_close(latest_price_usd(&items).unwrap(), 67_000.0, 1e-9);
}

#[test]
fn test_latest_price_empty_list() {
    assert!(matches!(latest_price_usd(&[]), Err(FeedError::NoPriceData)));
}

#[test]
fn test_parse_price_response() {
    let body = r#"{
        "data": {
            "btcPriceList": [
                {"timestamp": 1700000000, "price": {"base": 3000000000, "offset": 4, "currencyUnit": "USDCENT", "formattedAmount": "3000"}},
                {"timestamp": 1700003600, "price": {"base": 3100000000, "offset": 4, "currencyUnit": "USDCENT", "formattedAmount": "3100"}}
            ]
        }
    }"#;
    assert_close(parse_price_response(body).unwrap(), 3_100.0, 1e-9);
}

#[test]
fn test_parse_price_response_without_data() {
    assert!(matches!(
        parse_price_response(r#"{"data":{"btcPriceList":null}}"#),
        Err(FeedError::NoPriceData)
    ));
    assert!(matches!(
        parse_price_response(r#"{"errors":[{"message":"rate limited"}]}"#),
        Err(FeedError::NoPriceData)
    ));
}

#[test]
fn test_parse_price_response_malformed() {
    assert!(matches!(
        parse_price_response("not json"),
        Err(FeedError::InvalidResponse(_))
    ));
}
