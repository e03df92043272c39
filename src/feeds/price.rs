//! BTC/USD spot price from a GraphQL `btcPriceList` feed
//!
//! Prices arrive as USD cents scaled by `10^offset`. The engine never sees
//! the price; it is only used to show a fee in fiat.

use crate::config::PriceConfig;
use crate::errors::{FeedError, FeedResult};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

const BTC_PRICE_LIST_QUERY: &str = "query btcPriceList($range: PriceGraphRange!) {
  btcPriceList(range: $range) {
    timestamp
    price {
      base
      offset
      currencyUnit
      formattedAmount
    }
  }
}";

/// One scaled price quote
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub base: f64,
    pub offset: i32,
    pub currency_unit: String,
    #[serde(default)]
    pub formatted_amount: String,
}

impl PriceEntry {
    /// Price in US dollars (`base` is USD cents scaled by `10^offset`)
    ///
    /// # Examples
    /// ```
    /// use tiered_fee_calculator::feeds::PriceEntry;
    ///
    /// let entry = PriceEntry {
    ///     base: 27_085_000_000.0,
    ///     offset: 4,
    ///     currency_unit: "USDCENT".to_string(),
    ///     formatted_amount: String::new(),
    /// };
    /// assert!((entry.to_usd() - 27_085.0).abs() < 1e-9);
    /// ```
    pub fn to_usd(&self) -> f64 {
        self.base / 10f64.powi(self.offset) / 100.0
    }
}

/// A timestamped price from the list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceListItem {
    pub timestamp: i64,
    pub price: PriceEntry,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    data: Option<PriceData>,
}

#[derive(Debug, Deserialize)]
struct PriceData {
    #[serde(rename = "btcPriceList")]
    btc_price_list: Option<Vec<PriceListItem>>,
}

/// USD price of the most recent entry by timestamp
pub fn latest_price_usd(items: &[PriceListItem]) -> FeedResult<f64> {
    items
        .iter()
        .max_by_key(|item| item.timestamp)
        .map(|item| item.price.to_usd())
        .ok_or(FeedError::NoPriceData)
}

/// Parse a GraphQL price response body into a USD price
pub fn parse_price_response(body: &str) -> FeedResult<f64> {
    let response: PriceResponse = serde_json::from_str(body)
        .map_err(|e| FeedError::InvalidResponse(format!("Invalid price payload: {}", e)))?;

    let items = response
        .data
        .and_then(|data| data.btc_price_list)
        .unwrap_or_default();
    latest_price_usd(&items)
}

/// HTTP client for the spot-price feed
pub struct PriceClient {
    http: reqwest::Client,
    config: PriceConfig,
}

impl PriceClient {
    pub fn new(config: PriceConfig) -> FeedResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FeedError::RequestFailed {
                endpoint: config.url.clone(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { http, config })
    }

    /// Fetch the latest BTC price in USD
    pub async fn fetch_usd_price(&self) -> FeedResult<f64> {
        debug!("POST {} (btcPriceList, range {})", self.config.url, self.config.range);

        let body = json!({
            "query": BTC_PRICE_LIST_QUERY,
            "variables": { "range": self.config.range },
        });

        let response = self
            .http
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.request_failed(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.request_failed(e))?;

        if !status.is_success() {
            return Err(FeedError::Status {
                endpoint: self.config.url.clone(),
                status: status.as_u16(),
                body: text,
            });
        }

        let price = parse_price_response(&text)?;
        info!("BTC spot price: ${:.2}", price);
        Ok(price)
    }

    fn request_failed(&self, err: reqwest::Error) -> FeedError {
        FeedError::RequestFailed {
            endpoint: self.config.url.clone(),
            message: err.to_string(),
        }
    }
}
