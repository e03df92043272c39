//! CLI command implementations and the argument groups they share

pub mod quote;
pub mod rates;
pub mod scale;
pub mod table;
pub mod watch;

use crate::config::AppConfig;
use crate::engine::rate_from_slider_position;
use crate::errors::{AppResult, FeeResult};
use crate::feeds::{FetchedSnapshot, MempoolClient, PriceClient};
use crate::types::SnapshotSource;
use crate::utils::currency::parse_btc_amount;
use clap::Args;
use tracing::warn;

/// Payment amount, in sats or BTC
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct AmountArgs {
    /// Payment amount in satoshis
    #[arg(long)]
    pub amount_sats: Option<u64>,

    /// Payment amount in BTC (up to 8 decimal places)
    #[arg(long)]
    pub btc: Option<String>,
}

impl AmountArgs {
    pub fn to_sats(&self) -> FeeResult<u64> {
        match (&self.amount_sats, &self.btc) {
            (Some(sats), _) => Ok(*sats),
            (None, Some(btc)) => parse_btc_amount(btc),
            // clap enforces one of the two
            (None, None) => Ok(0),
        }
    }
}

/// What-if congestion, as a rate or a simulator slider position
#[derive(Args, Debug, Clone, Default)]
pub struct SimulationArgs {
    /// Price at this congestion rate (sat/vB) instead of the snapshot's fastest rate
    #[arg(long, conflicts_with = "slider")]
    pub simulate_rate: Option<f64>,

    /// Price at the congestion rate for this simulator position (0-100)
    #[arg(long)]
    pub slider: Option<f64>,
}

impl SimulationArgs {
    pub fn congestion_override(&self) -> Option<f64> {
        self.simulate_rate
            .or_else(|| self.slider.map(|p| f64::from(rate_from_slider_position(p))))
    }
}

/// Where the fee-rate snapshot comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SnapshotArgs {
    /// Do not contact the fee-rate feed; use the configured fallback rates
    #[arg(long)]
    pub offline: bool,

    /// Replace the snapshot's fastest rate (sat/vB)
    #[arg(long)]
    pub fastest: Option<f64>,
}

impl SnapshotArgs {
    /// Fetch (or build) the snapshot to quote against
    pub async fn resolve(&self, config: &AppConfig) -> AppResult<FetchedSnapshot> {
        let fallback = config.fallback.snapshot()?;

        let fetched = if self.offline {
            FetchedSnapshot::new(fallback, SnapshotSource::Fallback)
        } else {
            let client = MempoolClient::new(config.mempool.clone(), fallback)?;
            client.fetch_snapshot_or_fallback().await
        };

        match self.fastest {
            Some(fastest) => Ok(FetchedSnapshot::new(
                fetched.snapshot.with_fastest(fastest),
                SnapshotSource::Manual,
            )),
            None => Ok(fetched),
        }
    }
}

/// Optional BTC/USD price for fiat display
#[derive(Args, Debug, Clone, Default)]
pub struct PriceArgs {
    /// BTC price in USD to convert the fee with
    #[arg(long, conflicts_with = "fetch_price")]
    pub usd_price: Option<f64>,

    /// Fetch the BTC price in USD from the price feed
    #[arg(long)]
    pub fetch_price: bool,
}

impl PriceArgs {
    /// Spot price, if one was given or could be fetched
    ///
    /// A failed fetch only drops the fiat line from the output.
    pub async fn resolve(&self, config: &AppConfig) -> Option<f64> {
        if self.usd_price.is_some() || !self.fetch_price {
            return self.usd_price;
        }

        let client = match PriceClient::new(config.price.clone()) {
            Ok(client) => client,
            Err(e) => {
                warn!("Price feed unavailable: {}", e);
                return None;
            }
        };
        match client.fetch_usd_price().await {
            Ok(price) => Some(price),
            Err(e) => {
                warn!("Failed to fetch BTC price: {}", e);
                None
            }
        }
    }
}
